// Quote pricing: base price is a per-guest multiplier, add-on services are
// either flat or per-guest. Unknown service keys cost nothing.

pub const CATERING_PER_GUEST: i64 = 300;
pub const DECORATION_FLAT: i64 = 5000;
pub const SOUND_FLAT: i64 = 4000;
pub const PHOTOGRAPHY_FLAT: i64 = 7000;
pub const PERMIT_FLAT: i64 = 2000;

pub fn service_cost(service: &str, guests: i64) -> i64 {
    match service {
        "catering" => CATERING_PER_GUEST * guests,
        "decoration" => DECORATION_FLAT,
        "sound" => SOUND_FLAT,
        "photography" => PHOTOGRAPHY_FLAT,
        "permit" => PERMIT_FLAT,
        _ => 0,
    }
}

pub fn quote_total(base_price: i64, guests: i64, services: &[String]) -> i64 {
    let services_cost: i64 = services.iter().map(|s| service_cost(s, guests)).sum();
    base_price * guests + services_cost
}
