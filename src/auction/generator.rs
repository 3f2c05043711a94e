/// 경매 레코드 생성
/// 카테고리 선택 -> 판매자 / 입찰 생성 -> 레코드 조립 순으로 경매 하나를 만든다.
// region:    --- Imports
use crate::auction::model::{item_id, AuctionRecord};
use crate::bidding::model::{Bid, Seller};
use crate::bidding::synthesizer::BidSynthesizer;
use crate::catalog::{Category, CategorySelector};
use crate::error::{GeneratorError, GeneratorResult};
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use fake::faker::lorem::en::Words;
use fake::Fake;
use rand::Rng;
use tracing::{debug, info};
// endregion: --- Imports

// region:    --- Auction Generator
/// 경매 레코드 생성기
pub struct AuctionGenerator {
    selector: CategorySelector,
    synthesizer: BidSynthesizer,
    reference_time: NaiveDateTime,
}

impl AuctionGenerator {
    /// 기준 시각이 속한 연도 안에서 경매 시작 시간을 뽑는 생성기
    pub fn new(synthesizer: BidSynthesizer, reference_time: NaiveDateTime) -> GeneratorResult<Self> {
        Ok(Self {
            selector: CategorySelector::new()?,
            synthesizer,
            reference_time,
        })
    }

    /// 경매 N개 생성 (item_id 순서 유지)
    pub fn generate_all<R: Rng + ?Sized>(
        &self,
        num_auctions: usize,
        rng: &mut R,
    ) -> GeneratorResult<Vec<AuctionRecord>> {
        info!(
            "{:<12} --> 경매 {}건 생성 시작 (최대 입찰 수 {})",
            "Generator",
            num_auctions,
            self.synthesizer.max_bids()
        );
        let auctions = (0..num_auctions)
            .map(|index| self.generate(index, rng))
            .collect::<GeneratorResult<Vec<_>>>()?;
        info!("{:<12} --> 경매 {}건 생성 완료", "Generator", auctions.len());
        Ok(auctions)
    }

    /// 경매 하나 생성
    pub fn generate<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> GeneratorResult<AuctionRecord> {
        let start_time = self.start_time(rng);
        let end_time = start_time + Duration::days(rng.gen_range(1..=3));

        let seller = self.synthesizer.seller(rng);
        let bids = self.synthesizer.bids(start_time, rng);
        let (category, title) = self.selector.select(rng);

        let tag_count = rng.gen_range(2..=5);
        let tags: Vec<String> = Words(tag_count..tag_count + 1).fake_with_rng(rng);

        let record = assemble(
            item_id(index),
            title,
            category,
            start_time,
            end_time,
            seller,
            bids,
            tags,
        )?;
        debug!(
            "{:<12} --> {} 생성: 입찰 {}건, 낙찰가 {}",
            "Generator",
            record.item_id,
            record.bids.len(),
            record.final_price
        );
        Ok(record)
    }

    /// 기준 연도 1월 1일 0시부터 기준 시각 사이의 임의 시각 (초 단위)
    fn start_time<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDateTime {
        let today = self.reference_time.date();
        let year_start = today.with_ordinal(1).unwrap_or(today).and_time(NaiveTime::default());
        let span = (self.reference_time - year_start).num_seconds().max(0);
        year_start + Duration::seconds(rng.gen_range(0..=span))
    }
}
// endregion: --- Auction Generator

// region:    --- Assembler
/// 레코드 조립: 낙찰가와 낙찰자는 마지막 입찰에서 가져온다.
#[allow(clippy::too_many_arguments)]
pub fn assemble(
    item_id: String,
    title: String,
    category: Category,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    seller: Seller,
    bids: Vec<Bid>,
    tags: Vec<String>,
) -> GeneratorResult<AuctionRecord> {
    let (final_price, winner_id) = match bids.last() {
        Some(last) => (last.amount, last.bidder_id.clone()),
        None => return Err(GeneratorError::EmptyBids { item_id }),
    };
    Ok(AuctionRecord {
        item_id,
        title,
        category,
        start_time,
        end_time,
        seller,
        bids,
        final_price,
        winner_id,
        tags,
    })
}
// endregion: --- Assembler
