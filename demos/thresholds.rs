use std::time::Duration;

use sloppy_duration::{SloppyDuration, StringerOpts, Template};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Show seconds until 90s, minutes from there on
    let opts = StringerOpts::empty().with_second_threshold(Duration::from_secs(90));

    println!("{}", SloppyDuration::parse_with_opts("80s", &opts)?);
    println!("{}", SloppyDuration::parse_with_opts("100s", &opts)?);

    let wordy = opts.with_template(Template::parse("{value} {longUnit}")?);
    for input in ["1s", "45s", "2d", "3w", "1M", "10y"] {
        println!("{:>4} -> {}", input, SloppyDuration::parse_with_opts(input, &wordy)?);
    }
    Ok(())
}
