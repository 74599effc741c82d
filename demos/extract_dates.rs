use numscan::{dates_ddmonyyyy, dates_iso8601, scan};

fn main() {
    let text = "Shipped 2018-06-22T18:22:19.123, delivered 25 Jul, 2015, invoiced 2015-02-30.";

    for hit in scan(text, [dates_iso8601, dates_ddmonyyyy]) {
        match hit.value() {
            Ok(value) => println!("{:<15} {:<25} {:?}", hit.label(), hit.as_str(), value),
            Err(e) => println!("{:<15} {:<25} {}", hit.label(), hit.as_str(), e),
        }
    }
}
