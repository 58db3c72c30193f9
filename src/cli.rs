//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use imdb_corpus::pipelines::imdb::PipelineConfig;
use imdb_corpus::transformers::StripMarkup;

fn parse_width(src: &str) -> Result<usize, String> {
    let width: usize = src.parse().map_err(|e| format!("{}", e))?;
    StripMarkup::check_width(width).map_err(|e| e.to_string())
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "imdb-corpus",
    about = "Extract the IMDb sentiment corpus into train/test delimited files."
)]
/// Pipeline parameters.
///
/// ```sh
/// imdb-corpus 0.1.0
/// Extract the IMDb sentiment corpus into train/test delimited files.
///
/// USAGE:
///     imdb-corpus [OPTIONS]
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///         --archive <archive>            corpus archive. Default is <data-folder>/raw/aclImdb_v1.tar.gz
///     -d, --data-folder <data-folder>    data folder [default: ../data]
///         --dst <dst>                    output folder. Default is <data-folder>/processed
///         --log-level <log-level>        log filter (e.g. `debug`). Default is $RUST_LOG, then `info`
///         --root <root>                  corpus root folder inside the archive [default: aclImdb]
///         --width <width>                wrapping width of plain text reviews, at least 20 [default: 78]
/// ```
pub struct ImdbCorpus {
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "data-folder",
        help = "data folder",
        default_value = "../data"
    )]
    pub data_folder: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "archive",
        help = "corpus archive. Default is <data-folder>/raw/aclImdb_v1.tar.gz"
    )]
    pub archive: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "output folder. Default is <data-folder>/processed"
    )]
    pub dst: Option<PathBuf>,
    #[structopt(
        long = "root",
        help = "corpus root folder inside the archive",
        default_value = "aclImdb"
    )]
    pub root: String,
    #[structopt(
        parse(try_from_str = parse_width),
        long = "width",
        help = "wrapping width of plain text reviews, at least 20",
        default_value = "78"
    )]
    pub width: usize,
    #[structopt(
        long = "log-level",
        help = "log filter (e.g. `debug`). Default is $RUST_LOG, then `info`"
    )]
    pub log_level: Option<String>,
}

impl ImdbCorpus {
    /// Resolve paths against the data folder.
    pub fn config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::from_data_folder(&self.data_folder);
        if let Some(archive) = &self.archive {
            config.archive = archive.clone();
        }
        if let Some(dst) = &self.dst {
            config.dst = dst.clone();
        }
        config.root = self.root.clone();
        config.width = self.width;
        config
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn no_arguments() {
        let opt = ImdbCorpus::from_iter(vec!["imdb-corpus"]);
        let config = opt.config();
        assert_eq!(config, PipelineConfig::from_data_folder(Path::new("../data")));
        assert_eq!(opt.log_level, None);
    }

    #[test]
    fn overrides() {
        let opt = ImdbCorpus::from_iter(vec![
            "imdb-corpus",
            "-d",
            "/data",
            "--dst",
            "/out",
            "--width",
            "120",
            "--log-level",
            "debug",
        ]);
        let config = opt.config();
        assert_eq!(config.archive, Path::new("/data/raw/aclImdb_v1.tar.gz"));
        assert_eq!(config.dst, Path::new("/out"));
        assert_eq!(config.width, 120);
        assert_eq!(opt.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn narrow_width_rejected() {
        for width in ["0", "5", "-1", "wide"] {
            let res = ImdbCorpus::from_iter_safe(vec!["imdb-corpus", "--width", width]);
            assert!(res.is_err(), "width {} should be rejected", width);
        }
    }
}
