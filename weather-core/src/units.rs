//! Celsius/Fahrenheit conversion, rounded to the nearest whole degree.
//!
//! `f64::round` rounds half away from zero.

pub fn to_fahrenheit(celsius: i32) -> i32 {
    (f64::from(celsius) * 9.0 / 5.0 + 32.0).round() as i32
}

pub fn to_celsius(fahrenheit: i32) -> i32 {
    ((f64::from(fahrenheit) - 32.0) * 5.0 / 9.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        assert_eq!(to_fahrenheit(0), 32);
        assert_eq!(to_fahrenheit(100), 212);
        assert_eq!(to_fahrenheit(-40), -40);
        assert_eq!(to_celsius(32), 0);
        assert_eq!(to_celsius(212), 100);
    }

    #[test]
    fn catalog_temperatures() {
        assert_eq!(to_fahrenheit(18), 64);
        assert_eq!(to_fahrenheit(25), 77);
        assert_eq!(to_fahrenheit(-5), 23);
    }

    #[test]
    fn conversions_stay_within_one_degree() {
        for c in -300..=300 {
            assert!((to_celsius(to_fahrenheit(c)) - c).abs() <= 1, "c = {c}");
        }
        for f in -500..=500 {
            assert!((to_fahrenheit(to_celsius(f)) - f).abs() <= 1, "f = {f}");
        }
    }
}
