use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// 판매자 모델
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Seller {
    pub user_id: String,
    pub rating: f64,
    pub country: String,
}

// 입찰 모델
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Bid {
    pub bidder_id: String,
    pub amount: f64,
    pub time: NaiveDateTime,
}
