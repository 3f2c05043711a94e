/// 카테고리 / 상품명 선택
/// 1. 가중치 기반 카테고리 추첨
/// 2. 카테고리 내 상품명 균등 추첨
/// 3. 상품 상태 접미사 추가
// region:    --- Imports
use crate::error::GeneratorResult;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
// endregion: --- Imports

// region:    --- Category
/// 경매 카테고리
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Books,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Fashion,
    #[serde(rename = "Toys & Games")]
    ToysAndGames,
    Collectibles,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Books => "Books",
            Category::HomeAndGarden => "Home & Garden",
            Category::Fashion => "Fashion",
            Category::ToysAndGames => "Toys & Games",
            Category::Collectibles => "Collectibles",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
// endregion: --- Category

// region:    --- Catalog Table
/// 카테고리별 추첨 가중치와 상품명 목록
pub struct CatalogEntry {
    pub category: Category,
    pub weight: f64,
    pub titles: &'static [&'static str],
}

pub static CATALOG: [CatalogEntry; 6] = [
    CatalogEntry {
        category: Category::Electronics,
        weight: 0.25,
        titles: &[
            "Apple iPhone 13 Pro",
            "Samsung Galaxy S22",
            "Sony WH-1000XM4",
            "GoPro Hero 10",
            "Dell XPS 13 Laptop",
            "Apple Watch Series 8",
        ],
    },
    CatalogEntry {
        category: Category::Books,
        weight: 0.15,
        titles: &[
            "Atomic Habits",
            "Harry Potter and the Philosopher's Stone (1st Ed.)",
            "The Lean Startup",
            "Sapiens: A Brief History of Humankind",
            "To Kill a Mockingbird",
            "The Great Gatsby",
        ],
    },
    CatalogEntry {
        category: Category::HomeAndGarden,
        weight: 0.2,
        titles: &[
            "Dyson V11 Vacuum Cleaner",
            "IKEA LINNMON Desk",
            "Weber Spirit II Gas Grill",
            "Philips Hue Starter Kit",
            "Nespresso Vertuo Coffee Machine",
            "Bosch Cordless Drill",
        ],
    },
    CatalogEntry {
        category: Category::Fashion,
        weight: 0.15,
        titles: &[
            "Nike Air Force 1",
            "Adidas Ultraboost",
            "Zara Wool Coat",
            "Louis Vuitton Neverfull Bag",
            "Casio G-Shock Watch",
            "Levi's 501 Jeans",
        ],
    },
    CatalogEntry {
        category: Category::ToysAndGames,
        weight: 0.15,
        titles: &[
            "LEGO Star Wars Millennium Falcon",
            "Nintendo Switch",
            "Barbie Dreamhouse",
            "Hot Wheels Mega Garage",
            "Uno Card Game",
            "Monopoly Classic Edition",
        ],
    },
    CatalogEntry {
        category: Category::Collectibles,
        weight: 0.1,
        titles: &[
            "Michael Jordan Rookie Card",
            "Vintage Concert Poster",
            "1980s Comic Book Set",
            "Rare Pokémon Charizard Card",
            "Antique Pocket Watch",
            "Funko Pop Marvel Collection",
        ],
    },
];

/// 상품 상태 접미사 (빈 문자열은 접미사 없음)
pub const CONDITION_SUFFIXES: [&str; 5] = ["(Like New)", "(Used)", "(2022 Model)", "(Rare)", ""];
// endregion: --- Catalog Table

// region:    --- Selector
/// 카테고리 / 상품명 선택기
pub struct CategorySelector {
    index: WeightedIndex<f64>,
}

impl CategorySelector {
    /// 가중치 테이블로 선택기 생성
    pub fn new() -> GeneratorResult<Self> {
        let index = WeightedIndex::new(CATALOG.iter().map(|entry| entry.weight))?;
        Ok(Self { index })
    }

    /// 카테고리와 상품명 추첨
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> (Category, String) {
        let entry = &CATALOG[self.index.sample(rng)];
        let title_base = entry.titles[rng.gen_range(0..entry.titles.len())];
        let suffix = CONDITION_SUFFIXES[rng.gen_range(0..CONDITION_SUFFIXES.len())];
        let title = format!("{} {}", title_base, suffix).trim_end().to_string();
        (entry.category, title)
    }
}
// endregion: --- Selector

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = CATALOG.iter().map(|entry| entry.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(CATALOG.iter().all(|entry| !entry.titles.is_empty()));
    }

    #[test]
    fn title_comes_from_category_pool() {
        let selector = CategorySelector::new().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let (category, title) = selector.select(&mut rng);
            let entry = CATALOG.iter().find(|e| e.category == category).unwrap();
            assert!(entry.titles.iter().any(|base| title.starts_with(base)));
            assert_eq!(title, title.trim_end());
            let rest = entry
                .titles
                .iter()
                .filter(|base| title.starts_with(*base))
                .map(|base| title[base.len()..].trim())
                .any(|rest| CONDITION_SUFFIXES.contains(&rest));
            assert!(rest, "unexpected suffix in {title}");
        }
    }

    #[test]
    fn frequencies_follow_weights() {
        let selector = CategorySelector::new().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 60_000;
        let mut counts: HashMap<Category, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(selector.select(&mut rng).0).or_default() += 1;
        }
        for entry in CATALOG.iter() {
            let observed = counts[&entry.category] as f64 / draws as f64;
            assert!(
                (observed - entry.weight).abs() < 0.02,
                "{} observed {observed}",
                entry.category
            );
        }
    }

    #[test]
    fn category_serializes_to_display_name() {
        let json = serde_json::to_string(&Category::HomeAndGarden).unwrap();
        assert_eq!(json, "\"Home & Garden\"");
        let parsed: Category = serde_json::from_str("\"Toys & Games\"").unwrap();
        assert_eq!(parsed, Category::ToysAndGames);
    }
}
