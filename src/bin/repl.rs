use dice_notation::{RandomSource, RollContext};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match std::env::args().nth(1) {
        Some(seed) => run(RollContext::seeded(seed.parse()?)),
        None => run(RollContext::default()),
    }
}

fn run<S: RandomSource>(mut ctx: RollContext<S>) -> Result<(), Box<dyn std::error::Error>> {
    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match ctx.roll(&line) {
                Ok(r) => println!("{}", r),
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    tracing::debug!(draws = ctx.draws(), "session finished");
    Ok(())
}
