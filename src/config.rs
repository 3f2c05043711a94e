use crate::bidding::synthesizer::DEFAULT_MAX_BIDS_PER_AUCTION;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// 생성기 설정 (CLI 플래그 또는 환경 변수)
#[derive(Parser, Debug, Clone)]
#[command(name = "auction-dataset", about = "Generate a fake online-auction dataset", version)]
pub struct Config {
    /// Number of auctions to generate (zero or negative writes empty outputs)
    #[arg(
        long,
        env = "NUM_AUCTIONS",
        default_value_t = 1000,
        allow_negative_numbers = true
    )]
    pub num_auctions: i64,

    /// Upper bound for the number of bids per auction
    #[arg(long = "max-bids", env = "MAX_BIDS_PER_AUCTION", default_value_t = DEFAULT_MAX_BIDS_PER_AUCTION)]
    pub max_bids: usize,

    /// Directory the output files are written to
    #[arg(long, env = "OUTPUT_DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Random seed for reproducible output
    #[arg(long, env = "AUCTION_SEED")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_auctions: 1000,
            max_bids: DEFAULT_MAX_BIDS_PER_AUCTION,
            output_dir: PathBuf::from("output"),
            seed: None,
        }
    }
}

impl Config {
    /// 음수는 0건으로 처리
    pub fn auction_count(&self) -> usize {
        usize::try_from(self.num_auctions).unwrap_or(0)
    }

    /// 시드가 있으면 고정 시드, 없으면 엔트로피로 생성
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["auction-dataset"]).unwrap();
        assert_eq!(config.max_bids, 25);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn negative_count_is_zero() {
        let config = Config::try_parse_from(["auction-dataset", "--num-auctions", "-5"]).unwrap();
        assert_eq!(config.num_auctions, -5);
        assert_eq!(config.auction_count(), 0);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "auction-dataset",
            "--num-auctions",
            "3",
            "--max-bids",
            "10",
            "--output-dir",
            "out",
            "--seed",
            "99",
        ])
        .unwrap();
        assert_eq!(config.auction_count(), 3);
        assert_eq!(config.max_bids, 10);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = Config {
            seed: Some(5),
            ..Config::default()
        };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
