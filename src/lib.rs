/*! # imdb-corpus

Extraction pipeline for the IMDb Large Movie Review sentiment corpus
(`aclImdb_v1.tar.gz`), producing `train.csv` and `test.csv` files
with `review|sentiment|movie_id|grade` records.

```no_run
use std::path::Path;
use imdb_corpus::pipelines::{ImdbCorpus, Pipeline};
use imdb_corpus::pipelines::imdb::PipelineConfig;

let config = PipelineConfig::from_data_folder(Path::new("../data"));
let counts = ImdbCorpus::new(config).run()?;
println!("{} train reviews, {} test reviews", counts.train, counts.test);
# Ok::<(), imdb_corpus::error::Error>(())
```
!*/
pub mod error;
pub mod io;
pub mod metadata;
pub mod pipelines;
pub mod sources;
pub mod transformers;
