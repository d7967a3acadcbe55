use std::time::Duration;

use sloppy_duration::{SloppyDuration, StringerOpts};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = StringerOpts::empty().with_minimum(Duration::from_secs(60), "less than a minute");

    println!("{}", SloppyDuration::parse_with_opts("59s", &opts)?);
    println!("{}", SloppyDuration::parse_with_opts("61s", &opts)?);
    Ok(())
}
