pub mod auction;
pub mod bidding;
pub mod catalog;
pub mod config;
pub mod error;
pub mod output;

use crate::auction::generator::AuctionGenerator;
use crate::auction::model::AuctionRecord;
use crate::bidding::synthesizer::BidSynthesizer;
use crate::config::Config;
use crate::error::GeneratorResult;
use crate::output::RecordSink;
use chrono::NaiveDateTime;
use rand::Rng;

/// 설정대로 경매를 생성해 출력 구현체에 기록
pub async fn run<R, S>(
    config: &Config,
    reference_time: NaiveDateTime,
    rng: &mut R,
    sink: &S,
) -> GeneratorResult<Vec<AuctionRecord>>
where
    R: Rng + ?Sized,
    S: RecordSink + ?Sized,
{
    let generator = AuctionGenerator::new(BidSynthesizer::new(config.max_bids), reference_time)?;
    let auctions = generator.generate_all(config.auction_count(), rng)?;
    sink.write_records(&auctions).await?;
    Ok(auctions)
}
