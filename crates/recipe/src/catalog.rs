//! Static demo recipe catalog.
//!
//! Order matters: ties in the scorer keep catalog order, and an empty ingredient
//! query walks the catalog front to back, so the first entry is the default dish.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Difficulty label shown next to a recipe. The Korean label is the wire value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
)]
pub enum Difficulty {
    #[serde(rename = "아주 쉬움")]
    #[strum(serialize = "아주 쉬움")]
    VeryEasy,
    #[serde(rename = "쉬움")]
    #[strum(serialize = "쉬움")]
    Easy,
    #[serde(rename = "보통")]
    #[strum(serialize = "보통")]
    Medium,
    #[serde(rename = "어려움")]
    #[strum(serialize = "어려움")]
    Hard,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeRecord {
    pub name: &'static str,
    pub desc: &'static str,
    /// Shown as `analysis` when this recipe is picked.
    pub analysis: &'static str,
    pub minutes: u16,
    pub difficulty: Difficulty,
    /// Matching tags. The first one doubles as the recipe's category.
    pub keywords: &'static [&'static str],
    /// Display ingredient list.
    pub ingredients: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub tip: &'static str,
    /// Closing encouragement for the tired parent.
    pub message: &'static str,
}

impl RecipeRecord {
    pub fn category(&self) -> Option<&'static str> {
        self.keywords.first().copied()
    }
}

pub static LIBRARY: &[RecipeRecord] = &[
    RecipeRecord {
        name: "영양 가득 계란말이",
        desc: "채소를 듬뿍 넣어 영양과 색감을 모두 잡은 반찬",
        analysis: "오늘 하루 수고 많으셨습니다. 무엇을 할지 고민될 때는 누구나 좋아하는 든든한 한 끼를 추천드려요.",
        minutes: 15,
        difficulty: Difficulty::Medium,
        keywords: &["계란", "달걀", "당근", "파"],
        ingredients: &["계란", "당근", "파", "소금"],
        steps: &[
            "계란을 풀고 잘게 썬 채소를 섞는다",
            "팬에 조금씩 부어가며 돌돌 말아 익힌다",
        ],
        tip: "약불에서 천천히 말아야 모양이 예쁘게 잡혀요",
        message: "무엇을 만들어도 당신의 정성이 최고의 조미료입니다. 오늘 밤은 가족과 함께 오순도순 따뜻한 식탁 되시길 바라요. 🍀",
    },
    RecipeRecord {
        name: "궁중 떡볶이",
        desc: "맵지 않아 아이들도 잘 먹는 고급스러운 떡볶이",
        analysis: "냉장고에 있는 소고기와 가래떡으로 아이들이 정말 좋아하는 단짠단짠 궁중 떡볶이를 만들 수 있어요.",
        minutes: 20,
        difficulty: Difficulty::Medium,
        keywords: &["소고기", "떡", "가래떡", "표고버섯", "양파"],
        ingredients: &["가래떡", "소고기(불고기용)", "양파", "표고버섯", "간장소스"],
        steps: &[
            "떡은 말랑하게 불리고 고기는 밑간을 한다",
            "채소와 함께 볶다가 간장 소스로 간을 맞춘다",
        ],
        tip: "마지막에 참기름 한 방울과 통깨를 뿌리면 고소함이 폭발해요",
        message: "영양 가득한 소고기와 쫀득한 떡의 조화처럼, 오늘 저녁 가족들과의 시간도 쫀득하고 행복하시길 바라요. 요리하느라 고생 많으셨습니다! 🍖",
    },
    RecipeRecord {
        name: "맑은 소고기 뭇국",
        desc: "누구나 좋아하는 시원하고 담백한 국물 요리",
        analysis: "준비된 소고기로 국물 맛이 일품인 소고기 뭇국을 끓여보세요. 속이 확 풀릴 거예요.",
        minutes: 30,
        difficulty: Difficulty::Medium,
        keywords: &["소고기", "무", "마늘"],
        ingredients: &["국거리 소고기", "무", "다진 마늘", "소금"],
        steps: &[
            "소고기와 무를 참기름에 볶는다",
            "물을 붓고 거품을 걷어내며 푹 끓인다",
        ],
        tip: "무를 얇게 썰면 조리 시간을 단축할 수 있어요",
        message: "따뜻한 국물 한 그릇에 오늘 하루의 고단함도 사르르 녹아내리길 바랍니다. 당신의 따뜻한 마음이 아이에게도 전달될 거예요. 🍲",
    },
    RecipeRecord {
        name: "간장 떡볶이",
        desc: "부드럽고 달콤한 아이들 맞춤 간식 겸 식사",
        analysis: "가래떡으로 간단하면서도 맛있는 간장 떡볶이를 만들어보세요.",
        minutes: 15,
        difficulty: Difficulty::Easy,
        keywords: &["떡", "가래떡", "간장"],
        ingredients: &["가래떡", "간장", "설탕", "참기름"],
        steps: &[
            "떡을 물에 살짝 데친다",
            "팬에 양념장과 함께 졸이듯이 볶는다",
        ],
        tip: "파기름을 먼저 내면 풍미가 훨씬 좋아집니다",
        message: "말랑말랑한 떡처럼 오늘 밤은 부드럽고 편안한 휴식 시간이 되시길 응원합니다. 수고 많으셨어요! 🍡",
    },
    RecipeRecord {
        name: "포근포근 감자조림",
        desc: "남녀노소 좋아하는 국민 밑반찬",
        analysis: "냉장고에 있는 감자를 활용해 점심과 어울리는 고소하고 포근한 메뉴를 추천합니다.",
        minutes: 20,
        difficulty: Difficulty::Easy,
        keywords: &["감자"],
        ingredients: &["감자", "간장", "올리고당", "물"],
        steps: &[
            "감자를 깍둑썰기해 물에 담가 전분을 뺀다",
            "양념장과 함께 감자가 익을 때까지 졸인다",
        ],
        tip: "마지막에 꿀을 한 스푼 넣으면 윤기가 좌르르 흘러요",
        message: "부드러운 감자 요리처럼 아이의 일상도 당신의 사랑으로 포근하게 채워질 거예요. 오늘도 정말 고생 많으셨습니다! 🥔",
    },
    RecipeRecord {
        name: "고등어 무조림",
        desc: "무에 양념이 쏙 배어 밥 한 공기가 뚝딱인 생선 조림",
        analysis: "고등어와 무가 있다면 점심과 겹치지 않는 칼칼한 생선 조림이 딱이에요.",
        minutes: 35,
        difficulty: Difficulty::Medium,
        keywords: &["고등어", "무", "생선"],
        ingredients: &["고등어", "무", "양파", "대파", "고춧가루", "간장"],
        steps: &[
            "무를 도톰하게 썰어 냄비 바닥에 깐다",
            "손질한 고등어를 올리고 양념장을 끼얹는다",
            "물을 붓고 중불에서 국물이 자작해질 때까지 졸인다",
        ],
        tip: "쌀뜨물을 쓰면 비린내가 훨씬 줄어들어요",
        message: "푹 졸인 무처럼 오늘 하루의 피로도 스르르 풀리시길 바라요. 정말 수고 많으셨습니다! 🐟",
    },
    RecipeRecord {
        name: "매콤 두부조림",
        desc: "냉장고에 있는 두부를 활용한 밥도둑 반찬",
        analysis: "두부로 부담 없이 만들 수 있는 매콤한 조림을 추천해요. 점심의 느끼함도 잡아줄 거예요.",
        minutes: 15,
        difficulty: Difficulty::Easy,
        keywords: &["두부", "대파"],
        ingredients: &["두부", "대파", "고춧가루", "간장"],
        steps: &[
            "두부를 먹기 좋게 썰어 구워준다",
            "양념장을 올리고 졸여준다",
            "대파를 뿌려 마무리한다",
        ],
        tip: "들기름에 구우면 훨씬 고소해요!",
        message: "오늘도 고생 많으셨어요! 아이와 맛있고 건강한 저녁 식사 하세요. 당신은 최고의 부모님입니다! 💪",
    },
    RecipeRecord {
        name: "스팸 애호박 고추장찌개",
        desc: "칼칼한 국물이 점심의 느끼함을 잡아주는 찌개",
        analysis: "스팸과 애호박으로 금방 끓일 수 있는 칼칼한 고추장찌개를 추천합니다.",
        minutes: 20,
        difficulty: Difficulty::Medium,
        keywords: &["스팸", "햄", "애호박", "고추장"],
        ingredients: &["스팸", "애호박", "고추장", "마늘"],
        steps: &[
            "재료를 깍둑썰기한다",
            "고추장을 풀고 물을 넣는다",
            "재료를 넣고 푹 끓여준다",
        ],
        tip: "스팸에서 짠맛이 나오니 소금 간은 나중에 하세요",
        message: "보글보글 끓는 찌개처럼 따뜻한 저녁 되세요. 오늘도 정말 애쓰셨어요! 🔥",
    },
    RecipeRecord {
        name: "닭가슴살 채소볶음",
        desc: "단백질과 채소를 한 번에 챙기는 가벼운 볶음 요리",
        analysis: "닭고기와 채소로 담백하게 볶아내면 점심과 겹치지 않는 가벼운 저녁이 돼요.",
        minutes: 20,
        difficulty: Difficulty::Easy,
        keywords: &["닭", "닭고기", "닭가슴살", "브로콜리", "파프리카"],
        ingredients: &["닭가슴살", "브로콜리", "파프리카", "굴소스", "올리브유"],
        steps: &[
            "닭가슴살을 한입 크기로 썰어 밑간한다",
            "달군 팬에 닭을 먼저 익힌다",
            "채소를 넣고 굴소스로 빠르게 볶아낸다",
        ],
        tip: "채소는 센 불에서 짧게 볶아야 아삭함이 살아요",
        message: "가볍고 든든한 한 끼로 오늘 저녁은 몸도 마음도 개운하시길 바라요. 수고하셨습니다! 🥦",
    },
    RecipeRecord {
        name: "돼지고기 김치찜",
        desc: "푹 익은 김치와 돼지고기가 어우러진 든든한 찜 요리",
        analysis: "돼지고기와 김치가 있다면 시간은 조금 걸려도 온 가족이 좋아하는 김치찜을 추천해요.",
        minutes: 40,
        difficulty: Difficulty::Hard,
        keywords: &["돼지고기", "삼겹살", "목살", "김치"],
        ingredients: &["돼지고기(목살)", "신김치", "양파", "대파", "다진 마늘"],
        steps: &[
            "냄비에 김치를 깔고 돼지고기를 큼직하게 올린다",
            "물을 자작하게 붓고 뚜껑을 덮어 중약불로 끓인다",
            "양파와 대파를 넣고 국물이 졸아들 때까지 익힌다",
        ],
        tip: "설탕을 반 스푼 넣으면 김치의 신맛이 부드러워져요",
        message: "오래 끓일수록 깊어지는 김치찜처럼 가족의 저녁 시간도 깊고 따뜻하길 바라요. 오늘도 고생 많으셨어요! 🥘",
    },
    RecipeRecord {
        name: "달콤 어묵볶음",
        desc: "10분이면 완성되는 아이들 최애 반찬",
        analysis: "어묵만 있으면 금방 만들 수 있는 달콤한 볶음 반찬을 추천해요.",
        minutes: 10,
        difficulty: Difficulty::VeryEasy,
        keywords: &["어묵", "양파"],
        ingredients: &["사각어묵", "양파", "간장", "물엿"],
        steps: &[
            "어묵과 양파를 먹기 좋게 썬다",
            "기름을 두른 팬에 볶다가 간장과 물엿으로 간한다",
        ],
        tip: "어묵을 끓는 물에 한 번 데치면 기름기가 빠져 더 깔끔해요",
        message: "짧은 시간에 뚝딱 만든 반찬에도 당신의 사랑이 가득 담겨 있어요. 오늘 하루도 정말 수고하셨습니다! 🍢",
    },
    RecipeRecord {
        name: "참치 김치볶음밥",
        desc: "냉장고 속 재료로 한 그릇 뚝딱 해결하는 볶음밥",
        analysis: "참치와 김치로 빠르게 만들 수 있는 한 그릇 요리를 추천합니다.",
        minutes: 10,
        difficulty: Difficulty::VeryEasy,
        keywords: &["참치", "김치", "밥"],
        ingredients: &["참치캔", "김치", "밥", "계란", "참기름"],
        steps: &[
            "기름 뺀 참치와 잘게 썬 김치를 볶는다",
            "밥을 넣고 고루 섞어가며 볶는다",
            "참기름을 두르고 계란 프라이를 올린다",
        ],
        tip: "김치를 먼저 충분히 볶아야 감칠맛이 올라와요",
        message: "바쁜 날엔 한 그릇 요리도 충분히 훌륭한 저녁이에요. 오늘도 고생 많으셨습니다! 🍳",
    },
];

/// First keyword of every recipe, deduplicated, in catalog order.
pub fn categories(library: &[RecipeRecord]) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for category in library.iter().filter_map(RecipeRecord::category) {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}
