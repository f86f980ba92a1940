//! Built-in country atlases.
//!
//! Two hand-authored tables ship with the game:
//!
//! - [`daily_atlas`] -- 15 countries for the daily-cap map. Each has its own
//!   four stage glyphs, a tree blurb, and one featured animal.
//! - [`garden_atlas`] -- 13 countries for the planted-tree garden. Each has a
//!   species profile (scientific name, carbon figure, benefits) and a list
//!   of wildlife that returns as trees level up.

use canopy_types::{Coordinates, CountryRecord, STAGE_GLYPHS, SpeciesProfile, Wildlife};
use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::error::WorldError;

const BIRD: &str = "🐦";
const BUG: &str = "🐛";
const FISH: &str = "🐟";
const SQUIRREL: &str = "🐿️";
const TURTLE: &str = "🐢";

/// Helper to build a [`Wildlife`].
fn wildlife(symbol: &str, name: &str, description: Option<&str>) -> Wildlife {
    Wildlife {
        symbol: symbol.to_owned(),
        name: name.to_owned(),
        description: description.map(str::to_owned),
    }
}

/// Helper to build a daily-map [`CountryRecord`] with one featured animal.
fn daily(
    name: &str,
    (lat, lng): (f64, f64),
    glyphs: [&str; 4],
    tree_info: &str,
    (symbol, animal, animal_info): (&str, &str, &str),
) -> CountryRecord {
    CountryRecord {
        name: name.to_owned(),
        coordinates: Coordinates::new(lat, lng),
        stage_glyphs: glyphs.map(str::to_owned),
        species_description: tree_info.to_owned(),
        wildlife: vec![wildlife(symbol, animal, Some(animal_info))],
        profile: None,
    }
}

/// Helper to build a [`SpeciesProfile`].
fn profile(
    species: &str,
    scientific: &str,
    carbon: Decimal,
    image: &str,
    description: &str,
    benefits: &[&str],
    uses: &[&str],
) -> SpeciesProfile {
    SpeciesProfile {
        species: Some(species.to_owned()),
        scientific: Some(scientific.to_owned()),
        carbon_t_co2e_per_year: Some(carbon),
        image: Some(image.to_owned()),
        description: Some(description.to_owned()),
        env_benefits: Some(benefits.iter().map(|s| (*s).to_owned()).collect()),
        env_uses: Some(uses.iter().map(|s| (*s).to_owned()).collect()),
        status: None,
        source: None,
        height_m: None,
        age_years: None,
    }
}

/// Helper to build a garden [`CountryRecord`] from a profile and wildlife list.
fn garden(
    name: &str,
    (lat, lng): (f64, f64),
    profile: SpeciesProfile,
    wildlife_list: &[(&str, &str)],
) -> CountryRecord {
    CountryRecord {
        name: name.to_owned(),
        coordinates: Coordinates::new(lat, lng),
        stage_glyphs: STAGE_GLYPHS.map(str::to_owned),
        species_description: profile.description.clone().unwrap_or_default(),
        wildlife: wildlife_list
            .iter()
            .map(|(symbol, name)| wildlife(symbol, name, None))
            .collect(),
        profile: Some(profile),
    }
}

/// The 15-country table for the daily-cap map.
///
/// # Errors
///
/// Returns [`WorldError::DuplicateCountry`] if the table is malformed
/// (should not happen with the hard-coded data).
#[allow(clippy::too_many_lines)]
pub fn daily_atlas() -> Result<Catalog, WorldError> {
    Catalog::new(vec![
        daily(
            "대한민국",
            (36.5, 127.8),
            ["🌱", "🌿", "🌲", "🌳"],
            "소나무는 한국의 대표 나무입니다.",
            ("🦌", "고라니", "한국 산림의 대표 동물"),
        ),
        daily(
            "일본",
            (36.2, 138.3),
            ["🌱", "🌿", "🌸", "🌳"],
            "벚나무는 일본을 대표하는 나무입니다.",
            ("🦢", "학", "평화의 상징 새"),
        ),
        daily(
            "중국",
            (35.9, 104.2),
            ["🌱", "🌿", "🎋", "🌳"],
            "대나무는 중국 전역에서 자랍니다.",
            ("🐼", "판다", "대나무 숲 상징 동물"),
        ),
        daily(
            "인도",
            (20.6, 78.9),
            ["🌱", "🌿", "🌴", "🌳"],
            "망고나무는 인도의 대표 과일나무입니다.",
            ("🐘", "코끼리", "숲을 개척하는 동물"),
        ),
        daily(
            "태국",
            (15.8, 101.0),
            ["🌱", "🌿", "🍌", "🌴"],
            "바나나 나무는 열대 아시아에서 중요한 자원입니다.",
            ("🐒", "원숭이", "열대우림 서식"),
        ),
        daily(
            "인도네시아",
            (-0.8, 113.9),
            ["🌱", "🌿", "🌴", "🌳"],
            "야자나무는 열대 기후에서 중요한 자원입니다.",
            ("🐅", "수마트라호랑이", "열대우림 최상위 포식자"),
        ),
        daily(
            "러시아",
            (61.5, 105.3),
            ["🌱", "🌿", "🌲", "🌳"],
            "자작나무는 러시아 전역에 분포합니다.",
            ("🐻", "불곰", "북방 숲 대표 포식자"),
        ),
        daily(
            "핀란드",
            (61.9, 25.7),
            ["🌱", "🌿", "🌲", "🌳"],
            "자작나무는 북유럽 숲 대표 수종입니다.",
            ("🦌", "순록", "북유럽 자연 상징"),
        ),
        daily(
            "독일",
            (51.1, 10.4),
            ["🌱", "🌿", "🌳", "🌳"],
            "참나무는 독일 숲의 상징입니다.",
            ("🐗", "멧돼지", "유럽 숲 대표 동물"),
        ),
        daily(
            "프랑스",
            (46.2, 2.2),
            ["🌱", "🌿", "🍇", "🌳"],
            "포도나무는 프랑스 문화의 상징입니다.",
            ("🦊", "여우", "프랑스 농촌 동물"),
        ),
        daily(
            "브라질",
            (-14.2, -51.9),
            ["🌱", "🌿", "🌴", "🌳"],
            "아마존 고무나무는 지구의 허파 역할을 합니다.",
            ("🐆", "재규어", "아마존 최상위 포식자"),
        ),
        daily(
            "케냐",
            (0.0, 37.9),
            ["🌱", "🌿", "🌳", "🌳"],
            "바오밥나무는 물 저장 능력이 뛰어납니다.",
            ("🦒", "기린", "사바나 상징 동물"),
        ),
        daily(
            "캐나다",
            (56.1, -106.3),
            ["🌱", "🌿", "🌲", "🌳"],
            "단풍나무는 캐나다 상징입니다.",
            ("🦫", "비버", "하천 생태계 유지"),
        ),
        daily(
            "호주",
            (-25.3, 133.8),
            ["🌱", "🌿", "🌳", "🌳"],
            "유칼립투스는 호주 대표 나무입니다.",
            ("🦘", "캥거루", "호주 상징 동물"),
        ),
        daily(
            "미국",
            (37.1, -95.7),
            ["🌱", "🌿", "🌲", "🌳"],
            "세쿼이아는 세계에서 가장 큰 나무 중 하나입니다.",
            ("🦅", "흰머리독수리", "미국 상징 새"),
        ),
    ])
}

/// The 13-country table for the planted-tree garden.
///
/// # Errors
///
/// Returns [`WorldError::DuplicateCountry`] if the table is malformed
/// (should not happen with the hard-coded data).
#[allow(clippy::too_many_lines)]
pub fn garden_atlas() -> Result<Catalog, WorldError> {
    Catalog::new(vec![
        garden(
            "Korea, Republic of",
            (36.5, 127.8),
            profile(
                "소나무",
                "Pinus densiflora",
                Decimal::new(2, 2),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2f/Pinus_densiflora_in_Korea.jpg/640px-Pinus_densiflora_in_Korea.jpg",
                "한반도를 대표하는 상록 침엽수로 사철 푸른 숲을 이룹니다.",
                &["도시 미세먼지 저감과 서식지 제공", "사계절 산사태 방지에 기여"],
                &["방풍림, 조경, 산림복원"],
            ),
            &[(BIRD, "참새"), (BUG, "반딧불이"), (BIRD, "까치")],
        ),
        garden(
            "Japan",
            (36.2, 138.2),
            profile(
                "벚나무",
                "Prunus serrulata",
                Decimal::new(15, 3),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/8/81/Cherry_blossoms_in_Tokyo.jpg/640px-Cherry_blossoms_in_Tokyo.jpg",
                "봄을 상징하는 수종으로 도시 생물다양성에도 기여합니다.",
                &["곤충 수분활동 촉진", "도시 열섬 완화(그늘 제공)"],
                &["도시녹화, 생태관광"],
            ),
            &[(BIRD, "동박새"), (BUG, "장수풍뎅이")],
        ),
        garden(
            "China",
            (35.9, 104.2),
            profile(
                "은행나무",
                "Ginkgo biloba",
                Decimal::new(18, 3),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2c/Ginkgo_biloba_JPN.jpg/640px-Ginkgo_biloba_JPN.jpg",
                "오염에 강하고 장수하는 수종으로 도시 가로수에 널리 사용됩니다.",
                &["대기오염 저감", "길고 안정적인 탄소 저장"],
                &["가로수, 도시숲"],
            ),
            &[(BIRD, "꾀꼬리"), (FISH, "잉어")],
        ),
        garden(
            "United States",
            (39.8, -98.6),
            profile(
                "해안세쿼이아",
                "Sequoia sempervirens",
                Decimal::new(10, 0),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5e/Redwood_National_Park%2C_fog_in_the_forest.jpg/640px-Redwood_National_Park%2C_fog_in_the_forest.jpg",
                "세계에서 가장 큰 나무 중 하나로 막대한 탄소를 저장합니다.",
                &["대규모 탄소 흡수", "다양한 종의 서식지 제공"],
                &["보전 연구, 탄소 모니터링"],
            ),
            &[(BIRD, "흰머리독수리"), (BUG, "모나크나비")],
        ),
        garden(
            "Canada",
            (56.1, -106.3),
            profile(
                "전나무",
                "Abies balsamea",
                Decimal::new(3, 2),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/7/7c/Abies_balsamea_in_forest.jpg/640px-Abies_balsamea_in_forest.jpg",
                "북방 침엽수림을 이루며 광범위한 생태계를 지탱합니다.",
                &["토양보전", "대기정화"],
                &["자연보전, 수자원 보호"],
            ),
            &[(SQUIRREL, "비버(상징)"), (BIRD, "회색올빼미")],
        ),
        garden(
            "Brazil",
            (-10.8, -51.9),
            profile(
                "브라질너트나무",
                "Bertholletia excelsa",
                Decimal::new(5, 2),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2a/Bertholletia_excelsa.jpg/640px-Bertholletia_excelsa.jpg",
                "아마존의 핵심 수종으로 산림의 수분 순환에 기여합니다.",
                &["수분 매개 곤충 서식지 제공", "산림수자원 유지"],
                &["비파괴적 임산물(견과) 생산"],
            ),
            &[(BIRD, "큰부리새"), (BUG, "아마존 나비")],
        ),
        garden(
            "Australia",
            (-25.3, 133.8),
            profile(
                "유칼립투스",
                "Eucalyptus spp.",
                Decimal::new(6, 2),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5e/Eucalyptus_forest.jpg/640px-Eucalyptus_forest.jpg",
                "건조 환경에 적응한 상징적 수종으로 토착 동물의 서식지를 제공합니다.",
                &["토착종 서식지", "토양침식 방지"],
                &["복원, 방풍"],
            ),
            &[(BIRD, "코카투"), (TURTLE, "바다거북")],
        ),
        garden(
            "India",
            (22.9, 79.8),
            profile(
                "망고나무",
                "Mangifera indica",
                Decimal::new(25, 3),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8e/Mango_tree_in_India.jpg/640px-Mango_tree_in_India.jpg",
                "열대 과실수로 식량과 그늘을 동시에 제공합니다.",
                &["식량 공급", "그늘 제공으로 열섬 완화"],
                &["농업-산림 복합, 도시녹화"],
            ),
            &[(BIRD, "공작새"), (BUG, "호랑나비")],
        ),
        garden(
            "Russia",
            (61.5, 105.3),
            profile(
                "가문비나무",
                "Picea abies",
                Decimal::new(4, 2),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2a/Picea_abies_forest.jpg/640px-Picea_abies_forest.jpg",
                "타이가를 이루는 핵심 수종으로 탄소 저장고 역할을 합니다.",
                &["장기 탄소 저장", "야생동물 서식지"],
                &["대규모 산림보전"],
            ),
            &[(BIRD, "수리부엉이"), (BUG, "딱정벌레")],
        ),
        garden(
            "South Africa",
            (-30.6, 22.9),
            profile(
                "바오밥",
                "Adansonia digitata",
                Decimal::new(3, 2),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3c/Baobab_Trees_Madagascar.jpg/640px-Baobab_Trees_Madagascar.jpg",
                "사바나의 물 저장고로 불리며 생태계에 필수적입니다.",
                &["가뭄완화(수분 저장)", "야생동물 먹이 제공"],
                &["커뮤니티 기반 보전"],
            ),
            &[(BIRD, "참새사자(팀) – 상징"), (BUG, "흰개미")],
        ),
        garden(
            "France",
            (46.2, 2.2),
            profile(
                "서양너도밤나무",
                "Fagus sylvatica",
                Decimal::new(3, 2),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4a/Beech_forest_in_France.jpg/640px-Beech_forest_in_France.jpg",
                "온대 활엽수림의 대표 수종으로 토양과 수자원을 보호합니다.",
                &["수자원 보호", "토양 유기물 축적"],
                &["보호구역 관리"],
            ),
            &[(BIRD, "백조"), (BUG, "무당벌레")],
        ),
        garden(
            "United Kingdom",
            (55.4, -3.4),
            profile(
                "참나무",
                "Quercus robur",
                Decimal::new(35, 3),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9a/Quercus_robur_ancient_oak.jpg/640px-Quercus_robur_ancient_oak.jpg",
                "수백 종의 곤충과 균류에 서식지를 제공하는 키스톤 수종입니다.",
                &["생물다양성 증진", "탄소흡수"],
                &["헤지로우, 농림 복합"],
            ),
            &[(BIRD, "송골매"), (BUG, "붉은여치")],
        ),
        garden(
            "Germany",
            (51.2, 10.4),
            profile(
                "가문비나무",
                "Picea abies",
                Decimal::new(3, 2),
                "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6f/Spruce_Forest_Germany.jpg/640px-Spruce_Forest_Germany.jpg",
                "독일 산림의 주요 수종 중 하나로 홍수·침식 완화에 기여.",
                &["홍수 완화", "산사태 방지"],
                &["산림복원"],
            ),
            &[(BIRD, "황새"), (BUG, "쇠똥구리")],
        ),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn daily_atlas_has_fifteen_countries() {
        let atlas = daily_atlas().unwrap();
        assert_eq!(atlas.len(), 15);
        assert_eq!(atlas.names().next(), Some("대한민국"));
    }

    #[test]
    fn garden_atlas_has_thirteen_countries() {
        let atlas = garden_atlas().unwrap();
        assert_eq!(atlas.len(), 13);
        assert!(atlas.contains("Japan"));
    }

    #[test]
    fn every_daily_country_features_an_animal() {
        for record in daily_atlas().unwrap().records() {
            assert!(
                record.featured_wildlife().is_some(),
                "{} has no animal",
                record.name
            );
            assert!(!record.species_description.is_empty());
        }
    }

    #[test]
    fn daily_roster_line_uses_country_glyph() {
        let atlas = daily_atlas().unwrap();
        let korea = atlas.get("대한민국").unwrap();
        assert_eq!(korea.roster_line(korea.mature_glyph()), "대한민국 🌳 🦌 고라니");
    }

    #[test]
    fn garden_profiles_are_complete() {
        for record in garden_atlas().unwrap().records() {
            let profile = record.profile.as_ref().unwrap();
            assert!(profile.species.is_some(), "{} has no species", record.name);
            assert!(profile.carbon_t_co2e_per_year.is_some());
            assert!(!record.wildlife.is_empty());
        }
    }

    #[test]
    fn japan_lists_two_wildlife_species() {
        let atlas = garden_atlas().unwrap();
        assert_eq!(atlas.get("Japan").unwrap().wildlife.len(), 2);
    }
}
