//! Basic example of using the word search engine

use wordsearch_core::{
    Alphabet, Difficulty, GeneratorConfig, InputEvent, Orientation, Placement, Position, Puzzle,
    SelectionOutcome, WordBank,
};

fn main() {
    // Generate a puzzle
    println!("Generating a Medium puzzle...\n");
    let bank = WordBank::builtin().expect("built-in word bank should parse");
    let config = GeneratorConfig::default().seeded(2024);
    let mut puzzle = Puzzle::from_difficulty(&bank, Difficulty::Medium, &config)
        .expect("built-in words should fit the default grid");

    println!("{}", puzzle.grid());
    for placement in puzzle.remaining() {
        println!(
            "{:<8} {:<14} from {}",
            placement.word(),
            placement.orientation().to_string(),
            placement.cells()[0]
        );
    }

    // Solve it by dragging each word from its far end
    println!("\nSolving...\n");
    let placements = puzzle.remaining().to_vec();
    for placement in &placements {
        puzzle.handle_event(InputEvent::DragStart);
        for pos in placement.cells().iter().rev() {
            puzzle.handle_event(InputEvent::CellEntered(*pos));
        }
        match puzzle.handle_event(InputEvent::DragEnd) {
            SelectionOutcome::Found(found) => println!("Found {}", found.word()),
            SelectionOutcome::Completed(found) => println!("Found {}. Congrats!", found.word()),
            other => println!("Unexpected outcome: {:?}", other),
        }
    }
    println!("\n{}", puzzle.grid());

    // Hand-placed words on a tiny grid with the legacy filler pool
    println!("--- Hand-placed puzzle ---\n");
    let cat = Placement::new("CAT", Orientation::LeftToRight, Position::new(0, 1), 4)
        .expect("CAT fits a 4x4 grid");
    let tiny = Puzzle::from_placements(4, vec![cat], &Alphabet::legacy(), 7)
        .expect("one word fits a 4x4 grid");
    println!("{}", tiny.grid());

    // Words that cannot fit fail before play starts
    let too_many = ["ABCD", "EFGH", "IJKL", "MNOP", "Q"];
    match Puzzle::generate(&too_many, &GeneratorConfig::with_dimension(4)) {
        Ok(_) => println!("Unexpectedly placed an overfilled list"),
        Err(e) => println!("Rejected: {}", e),
    }
}
