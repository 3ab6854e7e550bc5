use yplaces_boundary::Place;

/// Single-line postal address, e.g. "Rua Santa Catarina 112, 4000-442 Porto, Portugal".
#[must_use]
pub fn address_line(place: &Place) -> Option<String> {
    let Place {
        address,
        postal_code,
        city,
        country,
        ..
    } = place;
    let non_empty = |s: &Option<String>| {
        s.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
    };
    let locality = match (non_empty(postal_code), non_empty(city)) {
        (Some(code), Some(city)) => Some(format!("{code} {city}")),
        (code, city) => code.or(city),
    };
    let parts: Vec<_> = [non_empty(address), locality, non_empty(country)]
        .into_iter()
        .flatten()
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yplaces_boundary::PlaceRating;

    fn place() -> Place {
        Place {
            id: None,
            name: "Cafe Majestic".into(),
            address: None,
            postal_code: None,
            city: None,
            state: None,
            country: None,
            latitude: 41.147,
            longitude: -8.606,
            email: None,
            phone_number: None,
            website: None,
            description: None,
            rating: PlaceRating::default(),
        }
    }

    #[test]
    fn full_address() {
        let mut p = place();
        p.address = Some("Rua Santa Catarina 112".into());
        p.postal_code = Some("4000-442".into());
        p.city = Some("Porto".into());
        p.country = Some("Portugal".into());
        assert_eq!(
            address_line(&p).unwrap(),
            "Rua Santa Catarina 112, 4000-442 Porto, Portugal"
        );
    }

    #[test]
    fn partial_address() {
        let mut p = place();
        p.city = Some("Porto".into());
        p.country = Some(" ".into());
        assert_eq!(address_line(&p).unwrap(), "Porto");
    }

    #[test]
    fn no_address() {
        assert_eq!(address_line(&place()), None);
    }
}
