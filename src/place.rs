// SPDX-License-Identifier: PMPL-1.0-or-later

//! Place names stored as comma-separated hierarchies, smallest unit first
//! (`Leith, Midlothian, Scotland`).

/// Borrowed view over a place name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Place<'a> {
    name: &'a str,
}

impl<'a> Place<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name: name.trim() }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    pub fn full_name(&self) -> &'a str {
        self.name
    }

    pub fn parts(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.name
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
    }

    /// The top of the hierarchy, normally the country.
    pub fn last_part(&self) -> &'a str {
        self.parts().last().unwrap_or("")
    }

    /// Drop the trailing country when it matches the census place.
    pub fn without_country(&self, country: &str) -> String {
        let parts: Vec<&str> = self.parts().collect();
        match parts.split_last() {
            Some((last, rest)) if !rest.is_empty() && same_place(last, country) => rest.join(", "),
            _ => parts.join(", "),
        }
    }

    /// True when the place names a country other than `country`.
    pub fn is_foreign_to(&self, country: &str) -> bool {
        !self.is_empty() && !same_place(self.last_part(), country)
    }
}

/// Case-insensitive, whitespace-tolerant comparison of two place names.
pub fn same_place(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_hierarchy() {
        let place = Place::new("Leith, Midlothian, Scotland");
        assert_eq!(place.parts().next(), Some("Leith"));
        assert_eq!(place.last_part(), "Scotland");
        assert_eq!(place.parts().count(), 3);
    }

    #[test]
    fn strips_matching_country_only() {
        let place = Place::new("Leith, Midlothian, Scotland");
        assert_eq!(place.without_country("scotland"), "Leith, Midlothian");
        assert_eq!(place.without_country("England"), "Leith, Midlothian, Scotland");

        let bare = Place::new("Scotland");
        assert_eq!(bare.without_country("Scotland"), "Scotland");
    }

    #[test]
    fn foreign_detection() {
        assert!(Place::new("Dublin, Ireland").is_foreign_to("Scotland"));
        assert!(!Place::new("Leith, Scotland").is_foreign_to("Scotland"));
        assert!(!Place::new("").is_foreign_to("Scotland"));
    }
}
