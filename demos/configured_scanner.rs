use numscan::Scanner;

fn main() {
    let names: Vec<String> = std::env::args().skip(1).collect();
    let scanner = if names.is_empty() {
        Scanner::all()
    } else {
        match Scanner::from_names(&names) {
            Ok(scanner) => scanner,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        }
    };

    let text = "The 3rd batch of 1,024 units left on 25 Jul 2015 (2015-07-25 08:00), 2.5% were damaged.";
    for hit in scanner.scan(text) {
        println!("{}\t{}", hit.label(), hit.as_str());
    }
}
