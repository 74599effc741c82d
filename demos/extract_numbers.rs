use numscan::{integers, mixed_ordinals, scan};

fn main() {
    let text = "On the 5th of May 1845, 77.9% of 123,456,789 people agreed, 1st time in 20 years.";

    // Integers first, then ordinals
    for hit in scan(text, [integers, mixed_ordinals]) {
        println!("{:>8} {:>3}..{:<3} {}", hit.label(), hit.as_match().start(), hit.as_match().end(), hit.as_str());
    }

    println!("\nValues:");
    for hit in integers(text) {
        match hit.value() {
            Ok(value) => println!("  {:?}", value),
            Err(e) => println!("  {}: {}", hit.as_str(), e),
        }
    }
}
