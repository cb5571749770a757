use std::{
    io::{stdout, BufWriter},
    time::Duration,
};

use bruteforce::{
    config::DEFAULT_DELAY, logging, Alphabet, ColorMode, Config, Preset, RevealRenderer,
    StatsRenderer, Target,
};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(name = "bruteforce")]
#[command(about = "Reveal a string by guessing it one character at a time", long_about = None)]
struct Cli {
    /// Text to reconstruct
    #[arg(short, long, conflicts_with = "random")]
    target: Option<String>,

    /// Reconstruct a random string of this many characters instead
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Built-in alphabet to scan
    #[arg(short, long, value_enum, default_value_t = Preset::Letters, conflicts_with = "alphabet")]
    preset: Preset,

    /// Custom alphabet, tried in the given order
    #[arg(short, long)]
    alphabet: Option<String>,

    /// Pause after each trial, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Style trial lines
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Print statistics after the run
    #[arg(long)]
    stats: bool,

    /// List the built-in alphabets and exit
    #[arg(long)]
    list_presets: bool,
}

impl Cli {
    /// Maps arguments onto a config, generating the random target if one was asked for.
    fn config(&self) -> bruteforce::Result<Config> {
        let mut config = Config::default();
        config.alphabet = match &self.alphabet {
            Some(chars) => Alphabet::new(chars.chars())?,
            None => self.preset.alphabet(),
        };
        if let Some(len) = self.random {
            let target = match self.seed {
                Some(seed) => {
                    Target::random(len, &config.alphabet, &mut StdRng::seed_from_u64(seed))
                }
                None => Target::random(len, &config.alphabet, &mut rand::rng()),
            };
            config.target = target.to_string();
        } else if let Some(target) = &self.target {
            config.target = target.clone();
        }
        config.delay = Duration::from_millis(self.delay_ms);
        config.color = self.color;
        config.stats = self.stats;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    if cli.list_presets {
        for preset in Preset::iter() {
            println!("{preset:<13}{}", preset.alphabet());
        }
        return Ok(());
    }

    let config = cli.config()?;
    let target = Target::new(&config.target, &config.alphabet)?;
    let styled = config.color.enabled();
    let mut out = BufWriter::new(stdout().lock());
    let summary = RevealRenderer::new(&config.alphabet, &target, config.delay, styled)
        .render(&mut out)?;
    drop(out);

    if config.stats {
        StatsRenderer::new(&summary, target.scan_cost(&config.alphabet), styled).render()?;
    }
    Ok(())
}
