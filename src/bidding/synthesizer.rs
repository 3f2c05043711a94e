/// 판매자 / 입찰 이력 생성
/// 1. 판매자 프로필
/// 2. 시간순 정렬된 입찰 목록 (입찰가는 위치 순으로 증가)
// region:    --- Imports
use crate::bidding::model::{Bid, Seller};
use chrono::{Duration, NaiveDateTime};
use fake::faker::address::en::CountryCode;
use fake::faker::internet::en::Username;
use fake::Fake;
use rand::Rng;
// endregion: --- Imports

// region:    --- Constants
/// 경매당 최소 입찰 수
pub const MIN_BIDS_PER_AUCTION: usize = 2;

/// 경매당 최대 입찰 수 기본값
pub const DEFAULT_MAX_BIDS_PER_AUCTION: usize = 25;

/// 입찰 시간 오프셋 상한 (분, 24시간)
const MAX_BID_OFFSET_MINUTES: i64 = 60 * 24;
// endregion: --- Constants

// region:    --- Synthesizer
/// 판매자 및 입찰 생성기
#[derive(Debug, Clone, Copy)]
pub struct BidSynthesizer {
    max_bids: usize,
}

impl Default for BidSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BIDS_PER_AUCTION)
    }
}

impl BidSynthesizer {
    /// 최대 입찰 수가 최소값보다 작으면 최소값으로 보정
    pub fn new(max_bids: usize) -> Self {
        Self {
            max_bids: max_bids.max(MIN_BIDS_PER_AUCTION),
        }
    }

    pub fn max_bids(&self) -> usize {
        self.max_bids
    }

    /// 1. 판매자 프로필 생성
    pub fn seller<R: Rng + ?Sized>(&self, rng: &mut R) -> Seller {
        Seller {
            user_id: Username().fake_with_rng(rng),
            rating: round_cents(rng.gen_range(3.5..=5.0)),
            country: CountryCode().fake_with_rng(rng),
        }
    }

    /// 2. 입찰 목록 생성
    pub fn bids<R: Rng + ?Sized>(&self, start_time: NaiveDateTime, rng: &mut R) -> Vec<Bid> {
        let num_bids = rng.gen_range(MIN_BIDS_PER_AUCTION..=self.max_bids);
        self.bids_with_count(start_time, num_bids, rng)
    }

    /// 입찰 수를 지정해 입찰 목록 생성
    ///
    /// 시간은 먼저 정렬한 뒤 위치 순서대로 입찰가를 붙인다. 입찰가는 위치마다
    /// [1, 10) 범위의 증분이 더해지므로 위치 순으로 항상 증가한다.
    pub fn bids_with_count<R: Rng + ?Sized>(
        &self,
        start_time: NaiveDateTime,
        num_bids: usize,
        rng: &mut R,
    ) -> Vec<Bid> {
        let mut times: Vec<NaiveDateTime> = (0..num_bids)
            .map(|_| start_time + Duration::minutes(rng.gen_range(1..=MAX_BID_OFFSET_MINUTES)))
            .collect();
        times.sort();

        let mut amount: f64 = rng.gen_range(10.0..100.0);
        times
            .into_iter()
            .enumerate()
            .map(|(position, time)| {
                if position > 0 {
                    amount += rng.gen_range(1.0..10.0);
                }
                Bid {
                    bidder_id: Username().fake_with_rng(rng),
                    amount: round_cents(amount),
                    time,
                }
            })
            .collect()
    }
}
// endregion: --- Synthesizer

/// 소수점 둘째 자리 반올림
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
