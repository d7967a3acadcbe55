use sloppy_duration::{SloppyDuration, DAY};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse a value
    let two_days = SloppyDuration::parse("2d")?;
    println!("Two days is: {}", two_days);

    // Compare with a std Duration
    println!("2d is 48h: {}", two_days.duration() == DAY * 2);

    // Make a std Duration sloppy
    let normal_week = DAY * 7;
    println!("Normal week: {:?}", normal_week);
    // The default week bucket starts at 14 days
    println!("Sloppy week: {}", SloppyDuration::wrap(normal_week));
    println!("Sloppy couple of weeks: {}", SloppyDuration::wrap(normal_week * 2));

    // Convert units (sloppily)
    let year = SloppyDuration::parse("1y")?;
    println!("There are about {} days in a year", year.days());

    match SloppyDuration::parse("1m30s") {
        Ok(d) => println!("Unexpectedly parsed: {}", d),
        Err(err) => println!("Composites are rejected: {}", err),
    }
    Ok(())
}
