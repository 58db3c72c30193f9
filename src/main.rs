//! # imdb-corpus
//!
//! Extracts the IMDb Large Movie Review corpus into `train.csv` and `test.csv`.
//!
//! ```sh
//! imdb-corpus                       # uses ../data/raw/aclImdb_v1.tar.gz
//! imdb-corpus -d /data --log-level debug
//! ```
use env_logger::Env;
use structopt::StructOpt;

use imdb_corpus::error::Error;
use imdb_corpus::pipelines::{ImdbCorpus, Pipeline};

#[macro_use]
extern crate log;

mod cli;

/// Build the logger from an explicit filter, falling back on `RUST_LOG` then `info`.
fn init_logger(filter: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn main() -> Result<(), Error> {
    let opt = cli::ImdbCorpus::from_args();
    init_logger(opt.log_level.as_deref());
    debug!("cli args\n{:#?}", opt);

    let p = ImdbCorpus::new(opt.config());
    let counts = p.run()?;
    info!(
        "wrote {} reviews ({} train, {} test)",
        counts.total(),
        counts.train,
        counts.test
    );
    Ok(())
}
