use std::{fmt, str::FromStr};

use anyhow::Result;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    // percentages resolve against the root's extent along the same axis
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            MarginLength::Px(v) => v,
            MarginLength::Percent(p) => extent * p / 100.0,
        }
    }
}

impl FromStr for MarginLength {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |num: &str| {
            num.parse::<f64>()
                .map_err(|_| anyhow::Error::msg(format!("invalid margin length {s}")))
        };

        if let Some(num) = s.strip_suffix("px") {
            Ok(MarginLength::Px(parse(num)?))
        } else if let Some(num) = s.strip_suffix('%') {
            Ok(MarginLength::Percent(parse(num)?))
        } else if s == "0" {
            Ok(MarginLength::Px(0.0))
        } else {
            Err(anyhow::Error::msg(format!(
                "margin length {s} must be in px or %"
            )))
        }
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MarginLength::Px(v) => write!(f, "{v}px"),
            MarginLength::Percent(p) => write!(f, "{p}%"),
        }
    }
}

// RootMargin
//
// the css-shorthand margin an intersection observer grows (positive) or shrinks
// (negative) its root by.  one to four values, in top/right/bottom/left order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl RootMargin {
    // vertical extent, in document coordinates, of the area a section must
    // overlap to count as intersecting
    pub fn vertical_band(&self, scroll_y: f64, viewport_height: f64) -> (f64, f64) {
        let top = scroll_y - self.top.resolve(viewport_height);
        let bottom = scroll_y + viewport_height + self.bottom.resolve(viewport_height);
        (top, bottom)
    }
}

impl FromStr for RootMargin {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(str::parse::<MarginLength>)
            .collect::<Result<Vec<_>>>()?;

        let (top, right, bottom, left) = match parts.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => {
                return Err(anyhow::Error::msg(format!(
                    "root margin {s:?} needs one to four lengths"
                )));
            }
        };

        Ok(RootMargin {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_value_shorthand() {
        let margin: RootMargin = "-20% 0px -70% 0px".parse().unwrap();

        assert_eq!(margin.top, MarginLength::Percent(-20.0));
        assert_eq!(margin.bottom, MarginLength::Percent(-70.0));
        assert_eq!(margin.to_string(), "-20% 0px -70% 0px");
    }

    #[test]
    fn shorter_shorthands_expand_like_css() {
        let one: RootMargin = "10px".parse().unwrap();
        assert_eq!(one.left, MarginLength::Px(10.0));

        let three: RootMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(three.left, MarginLength::Px(2.0));
        assert_eq!(three.bottom, MarginLength::Px(3.0));
    }

    #[test]
    fn bare_zero_is_allowed() {
        let margin: RootMargin = "0 0 -50px 0".parse().unwrap();

        assert_eq!(margin.bottom, MarginLength::Px(-50.0));
    }

    #[test]
    fn rejects_units_and_counts_it_cannot_use() {
        assert!("10em".parse::<RootMargin>().is_err());
        assert!("".parse::<RootMargin>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
    }

    #[test]
    fn band_shrinks_toward_the_top() {
        let margin: RootMargin = "-20% 0px -70% 0px".parse().unwrap();

        assert_eq!(margin.vertical_band(850.0, 600.0), (970.0, 1030.0));
    }
}
