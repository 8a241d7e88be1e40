//! School lunch menu extraction helpers.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use time::{Date, Duration, Weekday};

const DEMO_MENUS: [&str; 7] = [
    "카레라이스, 미역국, 계란말이",
    "비빔밥, 된장찌개, 떡갈비",
    "돈가스, 우동, 양배추샐러드",
    "제육덮밥, 콩나물국, 감자채볶음",
    "생선구이, 육개장, 시금치나물",
    "볶음밥, 짬뽕국, 단무지무침",
    "불고기덮밥, 만두국, 김치",
];

pub const DEMO_DAYS: i64 = 7;

static JSON_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("valid json block regex"));

fn weekday_ko(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "월",
        Weekday::Tuesday => "화",
        Weekday::Wednesday => "수",
        Weekday::Thursday => "목",
        Weekday::Friday => "금",
        Weekday::Saturday => "토",
        Weekday::Sunday => "일",
    }
}

/// `"MM/DD(요일)"`, the key format the menu prompts ask for.
pub fn menu_date_key(date: Date) -> String {
    format!(
        "{:02}/{:02}({})",
        u8::from(date.month()),
        date.day(),
        weekday_ko(date.weekday())
    )
}

/// A week of sample menus starting at `today`.
pub fn demo_menu(today: Date) -> Value {
    let mut menu = Map::new();
    for (offset, sample) in (0..DEMO_DAYS).zip(DEMO_MENUS.iter().cycle()) {
        let date = today.saturating_add(Duration::days(offset));
        menu.insert(menu_date_key(date), Value::String((*sample).to_string()));
    }
    Value::Object(menu)
}

/// Pull the date → menu object out of a model reply.
///
/// Prefers a fenced ```json block, then the whole reply. Anything unparsable is `{}`.
pub fn parse_menu_reply(reply: &str) -> Value {
    let candidate = JSON_BLOCK
        .captures(reply)
        .and_then(|captures| captures.get(1))
        .map_or(reply, |m| m.as_str());

    match serde_json::from_str::<Value>(candidate.trim()) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) | Err(_) => {
            tracing::warn!("menu reply is not a JSON object, returning empty menu");
            Value::Object(Map::new())
        }
    }
}

pub(crate) fn ocr_prompt(raw_text: &str) -> String {
    format!(
        "아래 텍스트에서 날짜별 점심 메뉴를 찾아 JSON 형식으로 정리해줘.\n\
         날짜: MM/DD(요일)\n\
         메뉴: 쉼표로 구분된 문자열\n\
         텍스트: {raw_text}\n\
         결과는 ```json ... ``` 블록에 넣어줘."
    )
}

pub(crate) const IMAGE_PROMPT: &str = "당신은 학교 급식표(식단표) OCR 전문가입니다.
이미지에서 날짜별 점심 메뉴를 찾아 아래 형식의 JSON으로만 반환하세요.
날짜 형식: \"MM/DD(요일)\" (예: \"02/10(월)\")
메뉴: 쉼표로 구분된 문자열
결과는 반드시 ```json ... ``` 블록 안에 넣으세요.
이미지에 급식표가 없다면 {}를 반환하세요.";

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).unwrap()
    }

    #[test]
    fn test_date_key_format() {
        assert_eq!(menu_date_key(date(2025, Month::February, 10)), "02/10(월)");
        assert_eq!(menu_date_key(date(2026, Month::October, 18)), "10/18(일)");
    }

    #[test]
    fn test_demo_menu_covers_a_week_in_order() {
        let menu = demo_menu(date(2025, Month::December, 29));
        let object = menu.as_object().unwrap();

        assert_eq!(object.len(), 7);
        let keys: Vec<_> = object.keys().map(String::as_str).collect();
        assert_eq!(keys[0], "12/29(월)");
        assert_eq!(keys[3], "01/01(목)");
        assert_eq!(object["12/29(월)"], DEMO_MENUS[0]);
        assert_eq!(object["01/04(일)"], DEMO_MENUS[6]);
    }

    #[test]
    fn test_parse_fenced_block() {
        let reply = "여기 있어요!\n```json\n{\"02/10(월)\": \"카레라이스, 미역국\"}\n```\n감사합니다";
        let menu = parse_menu_reply(reply);
        assert_eq!(menu["02/10(월)"], "카레라이스, 미역국");
    }

    #[test]
    fn test_parse_bare_json() {
        let menu = parse_menu_reply(" {\"02/11(화)\": \"비빔밥\"} ");
        assert_eq!(menu["02/11(화)"], "비빔밥");
    }

    #[test]
    fn test_unparsable_reply_is_empty_object() {
        assert_eq!(parse_menu_reply("급식표가 보이지 않아요"), serde_json::json!({}));
        assert_eq!(parse_menu_reply("```json\n[1, 2]\n```"), serde_json::json!({}));
    }
}
