use crate::bidding::model::{Bid, Seller};
use crate::catalog::Category;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// 경매 레코드 모델
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuctionRecord {
    pub item_id: String,
    pub title: String,
    pub category: Category,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub seller: Seller,
    pub bids: Vec<Bid>,
    pub final_price: f64,
    pub winner_id: String,
    pub tags: Vec<String>,
}

/// 경매 아이디 (AUC + 5자리 순번)
pub fn item_id(index: usize) -> String {
    format!("AUC{:05}", index)
}
