//! Attribute filters applied before scoring.
//!
//! Each filter is a pure predicate over a borrowed listing; absent parameters
//! match everything.

use pupscore_core::Listing;

use crate::CatalogQuery;

/// Location value that disables location filtering.
const ALL_LOCATIONS: &str = "all";

/// Pre-lowercased filter terms for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListingFilter {
    text: Option<String>,
    location: Option<String>,
    min_price: Option<u32>,
    max_price: Option<u32>,
    amenities: Vec<String>,
}

impl ListingFilter {
    pub(crate) fn from_query(query: &CatalogQuery) -> Self {
        let text = query
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase);
        let location = query
            .location
            .as_deref()
            .map(str::trim)
            .filter(|location| {
                !location.is_empty() && !location.eq_ignore_ascii_case(ALL_LOCATIONS)
            })
            .map(str::to_lowercase);
        let amenities = query
            .amenities
            .iter()
            .map(|amenity| amenity.trim().to_lowercase())
            .filter(|amenity| !amenity.is_empty())
            .collect();
        Self {
            text,
            location,
            min_price: query.min_price,
            max_price: query.max_price,
            amenities,
        }
    }

    /// Whether the price bounds can admit anything at all.
    pub(crate) const fn is_satisfiable(&self) -> bool {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    pub(crate) fn matches(&self, listing: &Listing) -> bool {
        self.matches_text(listing)
            && self.matches_location(listing)
            && self.matches_price(listing.price)
            && self.matches_amenities(listing)
    }

    fn matches_text(&self, listing: &Listing) -> bool {
        let Some(needle) = self.text.as_deref() else {
            return true;
        };
        contains_folded(&listing.name, needle)
            || listing
                .name_zh
                .as_deref()
                .is_some_and(|name| contains_folded(name, needle))
            || contains_folded(&listing.location, needle)
            || listing
                .location_zh
                .as_deref()
                .is_some_and(|location| contains_folded(location, needle))
            || listing
                .amenities
                .iter()
                .any(|amenity| contains_folded(amenity, needle))
    }

    fn matches_location(&self, listing: &Listing) -> bool {
        let Some(needle) = self.location.as_deref() else {
            return true;
        };
        contains_folded(&listing.location, needle)
            || listing
                .location_zh
                .as_deref()
                .is_some_and(|location| contains_folded(location, needle))
    }

    fn matches_price(&self, price: u32) -> bool {
        self.min_price.is_none_or(|min| price >= min) && self.max_price.is_none_or(|max| price <= max)
    }

    fn matches_amenities(&self, listing: &Listing) -> bool {
        if self.amenities.is_empty() {
            return true;
        }
        listing.amenities.iter().any(|tag| {
            let folded = tag.to_lowercase();
            self.amenities.iter().any(|wanted| *wanted == folded)
        })
    }
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn lakeside() -> Listing {
        Listing::new("lakeside", 680, "West Lake, Hangzhou")
            .with_name("Lakeside Courtyard")
            .with_location_zh("西湖")
            .with_amenities(["Gym", "spa"])
    }

    #[rstest]
    #[case(&["pool", "gym"], true)]
    #[case(&["GYM"], true)]
    #[case(&["pool"], false)]
    #[case(&[] as &[&str], true)]
    #[case(&["  "], true)]
    fn amenities_match_any_tag(lakeside: Listing, #[case] wanted: &[&str], #[case] expected: bool) {
        let filter =
            ListingFilter::from_query(&CatalogQuery::default().with_amenities(wanted.iter().copied()));
        assert_eq!(filter.matches(&lakeside), expected);
    }

    #[rstest]
    #[case(Some(400), Some(680), true)]
    #[case(Some(681), None, false)]
    #[case(None, Some(679), false)]
    #[case(Some(680), Some(680), true)]
    fn price_bounds_are_inclusive(
        lakeside: Listing,
        #[case] min: Option<u32>,
        #[case] max: Option<u32>,
        #[case] expected: bool,
    ) {
        let filter =
            ListingFilter::from_query(&CatalogQuery::default().with_price_range(min, max));
        assert_eq!(filter.matches(&lakeside), expected);
    }

    #[rstest]
    #[case("west lake", true)]
    #[case("西湖", true)]
    #[case("All", true)]
    #[case("", true)]
    #[case("Shanghai", false)]
    fn location_matches_either_language(
        lakeside: Listing,
        #[case] location: &str,
        #[case] expected: bool,
    ) {
        let filter = ListingFilter::from_query(&CatalogQuery::default().with_location(location));
        assert_eq!(filter.matches(&lakeside), expected);
    }

    #[rstest]
    #[case("courtyard", true)]
    #[case("SPA", true)]
    #[case("hangzhou", true)]
    #[case("hostel", false)]
    fn text_search_spans_names_locations_and_amenities(
        lakeside: Listing,
        #[case] text: &str,
        #[case] expected: bool,
    ) {
        let filter = ListingFilter::from_query(&CatalogQuery::default().with_text(text));
        assert_eq!(filter.matches(&lakeside), expected);
    }

    #[rstest]
    fn inverted_price_range_is_unsatisfiable() {
        let filter = ListingFilter::from_query(
            &CatalogQuery::default().with_price_range(Some(900), Some(400)),
        );
        assert!(!filter.is_satisfiable());
    }
}
