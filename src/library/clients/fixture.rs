//! Offline client with a canned chart.
//!
//! Serves a fixed shelf of real titles so the interface can be exercised
//! without network access (`--client fixture`). Every category returns the
//! same ten books.

use async_trait::async_trait;
use log::info;

use crate::library::client::{BookSearch, SearchError};
use crate::library::types::{Book, Category};

/// Canned catalog client.
pub struct FixtureClient;

fn book(id: u64, title: &str, author: &str, publisher: &str, thumbnail: &str) -> Book {
    Book {
        id,
        title_statement: title.to_string(),
        author: author.to_string(),
        publisher: publisher.to_string(),
        thumbnail_url: thumbnail.to_string(),
    }
}

/// The canned top-10, lifted from a real chart snapshot.
pub fn canned_chart() -> Vec<Book> {
    vec![
        book(
            2063706,
            "물고기는 존재하지 않는다 :상실, 사랑 그리고 숨어 있는 삶의 질서에 관한 이야기",
            "Miller, Lulu",
            "곰",
            "https://image.aladin.co.kr/product/28465/73/cover/k092835920_1.jpg",
        ),
        book(
            2051273,
            "불편한 편의점 : 김호연 장편소설",
            "김호연",
            "나무옆의자",
            "https://image.aladin.co.kr/product/26942/84/cover/k582730818_1.jpg",
        ),
        book(
            2034483,
            "공정하다는 착각 : 능력주의는 모두에게 같은 기회를 제공하는가",
            "Sandel, Michael J",
            "와이즈베리",
            "https://image.aladin.co.kr/product/25470/6/cover/k092633826_2.jpg",
        ),
        book(
            1968347,
            "구의 증명 :최진영 소설",
            "최진영",
            "은행나무",
            "https://image.aladin.co.kr/product/5527/50/cover/8956608555_1.jpg",
        ),
        book(
            1988385,
            "우리가 빛의 속도로 갈 수 없다면 : 김초엽 소설집",
            "김초엽",
            "허블",
            "https://image.aladin.co.kr/product/19359/16/cover/s012635525_1.jpg",
        ),
        book(
            2053080,
            "지구 끝의 온실 :김초엽 장편소설",
            "김초엽",
            "자이언트북스",
            "https://image.aladin.co.kr/product/27692/63/cover/k082733434_1.jpg",
        ),
        book(
            2109216,
            "(누구나 쉽게) 자료구조와 알고리즘 with 파이썬",
            "김현정",
            "길벗캠퍼스",
            "https://shopping-phinf.pstatic.net/main_3692549/36925498620.20230217105836.jpg",
        ),
        book(
            2031119,
            "대학물리학.1",
            "Serway, Raymond A",
            "북스힐",
            "https://image.aladin.co.kr/product/18748/11/cover/k022635170_2.jpg",
        ),
        book(
            2079415,
            "채식주의자 :한강 장편소설",
            "한강",
            "창비",
            "https://image.aladin.co.kr/product/29137/2/cover/8936434594_1.jpg",
        ),
        book(
            2046114,
            "미드나잇 라이브러리",
            "Haig, Matt",
            "인플루엔셜",
            "https://image.aladin.co.kr/product/26987/37/cover/k962730610_1.jpg",
        ),
    ]
}

#[async_trait]
impl BookSearch for FixtureClient {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn search_top_books(&self, category: Category) -> Result<Vec<Book>, SearchError> {
        info!("Fixture chart request: category={}", category.label());
        Ok(canned_chart())
    }
}
