//! Shared test tables.
//!
//! - `R1`: one variant `S1..S5`, fare 2.5 when boarding at 0
//! - `R2`: a 3-stop inbound and a 6-stop outbound variant, no fares;
//!   outbound position 2 is `S3`, the interchange with `R1`
//! - `R3`: two equally long variants, special service type
//! - `S9` only has a Chinese name

use std::collections::HashMap;

use crate::domain::{
    Fare, Fares, Language, Leg, LocalizedName, Route, RouteId, Stop, StopId,
};

pub fn lang(s: &str) -> Language {
    Language::parse(s).unwrap()
}

pub fn ids(xs: &[&str]) -> Vec<StopId> {
    xs.iter().map(|s| StopId::new(*s)).collect()
}

pub fn leg(route: &str, on: usize, off: usize) -> Leg {
    Leg::new(RouteId::new(route), on, off)
}

pub fn route(number: &str, variants: &[(&str, &[&str])]) -> Route {
    let stops = variants
        .iter()
        .map(|(key, xs)| (key.to_string(), ids(xs)))
        .collect();
    Route::new(number, stops)
}

pub fn routes() -> HashMap<RouteId, Route> {
    let r1 = route("1", &[("outbound", &["S1", "S2", "S3", "S4", "S5"])])
        .with_fares(Fares::from_pairs([(0, Fare::new("2.5"))]));
    let r2 = route(
        "2X",
        &[
            ("inbound", &["S4", "S3", "S6"]),
            ("outbound", &["S6", "S7", "S3", "S8", "S2", "S4"]),
        ],
    );
    let r3 = route(
        "N3",
        &[("kmb", &["S8", "S9", "S1"]), ("ctb", &["S7", "S6", "S5"])],
    )
    .with_service_type("2")
    .with_fares(Fares::from_pairs([(1, Fare::new("10.4"))]));

    HashMap::from([
        (RouteId::new("R1"), r1),
        (RouteId::new("R2"), r2),
        (RouteId::new("R3"), r3),
    ])
}

pub fn stops() -> HashMap<StopId, Stop> {
    let named = [
        ("S1", "Star Ferry", "天星碼頭"),
        ("S2", "Central", "中環"),
        ("S3", "Admiralty", "金鐘"),
        ("S4", "Wan Chai", "灣仔"),
        ("S5", "Causeway Bay", "銅鑼灣"),
        ("S6", "Mong Kok", "旺角"),
        ("S7", "Jordan", "佐敦"),
        ("S8", "Tsim Sha Tsui", "尖沙咀"),
    ];

    let mut table: HashMap<StopId, Stop> = named
        .into_iter()
        .map(|(id, en, zh)| {
            let name = LocalizedName::from_pairs([(lang("en"), en), (lang("zh"), zh)]);
            (StopId::new(id), Stop::new(name))
        })
        .collect();
    table.insert(
        StopId::new("S9"),
        Stop::new(LocalizedName::from_pairs([(lang("zh"), "油麻地")])),
    );
    table
}
