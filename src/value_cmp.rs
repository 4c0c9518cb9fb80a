use std::cmp::Ordering;

use yaml_rust2::Yaml;

/// Rank of a Yaml variant, used when ordering values of different kinds.
fn kind_rank(value: &Yaml) -> u8 {
    match value {
        Yaml::Null => 0,
        Yaml::Boolean(_) => 1,
        Yaml::Integer(_) => 2,
        Yaml::Real(_) => 3,
        Yaml::String(_) => 4,
        _ => 5,
    }
}

/// Total order over Yaml values: by variant kind first, then by natural
/// value within the kind. Reals that fail to parse as `f64` (and NaN)
/// fall back to their literal text so the order stays total. Non-scalar
/// values all rank equal among themselves.
pub fn scalar_ord(a: &Yaml, b: &Yaml) -> Ordering {
    match (a, b) {
        (Yaml::Boolean(x), Yaml::Boolean(y)) => x.cmp(y),
        (Yaml::Integer(x), Yaml::Integer(y)) => x.cmp(y),
        (Yaml::Real(x), Yaml::Real(y)) => match (x.parse::<f64>(), y.parse::<f64>()) {
            (Ok(fx), Ok(fy)) => fx.partial_cmp(&fy).unwrap_or_else(|| x.cmp(y)),
            _ => x.cmp(y),
        },
        (Yaml::String(x), Yaml::String(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Builds a comparator ordering records by the scalar at `record[key]`.
/// Records missing the key sort after records that carry it; two missing
/// keys compare equal.
pub fn key_comparator(key: &str) -> impl Fn(&Yaml, &Yaml) -> Ordering + '_ {
    move |a: &Yaml, b: &Yaml| {
        let ka = &a[key];
        let kb = &b[key];
        match (matches!(ka, Yaml::BadValue), matches!(kb, Yaml::BadValue)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => scalar_ord(ka, kb),
        }
    }
}

/// Recursively checks if two Yaml values are deeply equal.
pub fn deep_equal(a: &Yaml, b: &Yaml) -> bool {
    match (a, b) {
        (Yaml::Null, Yaml::Null) => true,
        (Yaml::Boolean(x), Yaml::Boolean(y)) => x == y,
        (Yaml::Integer(x), Yaml::Integer(y)) => x == y,
        (Yaml::Real(x), Yaml::Real(y)) => x == y,
        (Yaml::String(x), Yaml::String(y)) => x == y,
        (Yaml::Array(xs), Yaml::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys.iter()).all(|(x, y)| deep_equal(x, y))
        }
        (Yaml::Hash(xh), Yaml::Hash(yh)) => {
            xh.len() == yh.len()
                && xh
                    .iter()
                    .all(|(k, xv)| yh.get(k).map_or(false, |yv| deep_equal(xv, yv)))
        }
        _ => false,
    }
}
