use collatz::find_longest;

fn main() {
    const LIMIT: u64 = 1_000_000;

    match find_longest(LIMIT) {
        Ok(best) => {
            println!("Chain length: {}", best.length);
            println!("The answer to Problem 14 is: {}", best.number);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
