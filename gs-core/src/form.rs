//! The calculator form: an origin and a destination search field.

use crate::models::RouteRequest;
use crate::search::CitySearch;

/// Which side of the route a field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl Endpoint {
    pub fn placeholder(&self) -> &'static str {
        match self {
            Endpoint::Origin => "Origin city",
            Endpoint::Destination => "Destination city",
        }
    }

    pub fn other(&self) -> Endpoint {
        match self {
            Endpoint::Origin => Endpoint::Destination,
            Endpoint::Destination => Endpoint::Origin,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorForm {
    origin: CitySearch,
    destination: CitySearch,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, endpoint: Endpoint) -> &CitySearch {
        match endpoint {
            Endpoint::Origin => &self.origin,
            Endpoint::Destination => &self.destination,
        }
    }

    pub fn field_mut(&mut self, endpoint: Endpoint) -> &mut CitySearch {
        match endpoint {
            Endpoint::Origin => &mut self.origin,
            Endpoint::Destination => &mut self.destination,
        }
    }

    /// Submit is only available once both sides hold a confirmed city.
    pub fn can_submit(&self) -> bool {
        self.origin.is_confirmed() && self.destination.is_confirmed()
    }

    /// The request to send, or `None` while either side is unconfirmed.
    pub fn submission(&self) -> Option<RouteRequest> {
        let origin = self.origin.selection()?;
        let destination = self.destination.selection()?;
        Some(RouteRequest::between(origin, destination))
    }

    /// `endpoint` became the active field: the other side's dropdown closes,
    /// so at most one list is ever open.
    pub fn focus(&mut self, endpoint: Endpoint) {
        self.field_mut(endpoint.other()).dismiss();
    }

    /// Close every open dropdown (click outside the fields).
    pub fn dismiss_lists(&mut self) {
        self.origin.dismiss();
        self.destination.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, LatLon};

    fn confirm(form: &mut CalculatorForm, endpoint: Endpoint, name: &str, coords: LatLon) {
        let field = form.field_mut(endpoint);
        field.edit(name);
        field.select(&City {
            name: name.to_string(),
            coordinates: coords,
        });
    }

    #[test]
    fn submit_needs_both_sides() {
        let mut form = CalculatorForm::new();
        assert!(!form.can_submit());
        assert_eq!(form.submission(), None);

        confirm(&mut form, Endpoint::Origin, "Curitiba, PR", LatLon(-25.43, -49.27));
        assert!(!form.can_submit());

        confirm(&mut form, Endpoint::Destination, "Santos, SP", LatLon(-23.96, -46.33));
        assert!(form.can_submit());

        let request = form.submission().unwrap();
        assert_eq!(request.origin_city, "Curitiba, PR");
        assert_eq!(request.destination_city, "Santos, SP");
        assert_eq!(request.start_coords, LatLon(-25.43, -49.27));
        assert_eq!(request.end_coords, LatLon(-23.96, -46.33));
    }

    #[test]
    fn edit_disables_until_reconfirmed() {
        let mut form = CalculatorForm::new();
        confirm(&mut form, Endpoint::Origin, "Curitiba, PR", LatLon(-25.43, -49.27));
        confirm(&mut form, Endpoint::Destination, "Santos, SP", LatLon(-23.96, -46.33));

        form.field_mut(Endpoint::Destination).edit("Santos");
        assert!(!form.can_submit());

        // Dismissing lists or editing the other side does not re-enable.
        form.dismiss_lists();
        form.field_mut(Endpoint::Origin).edit("Curitiba, PR");
        assert!(!form.can_submit());

        confirm(&mut form, Endpoint::Destination, "Santos, SP", LatLon(-23.96, -46.33));
        assert!(form.can_submit());
    }

    #[test]
    fn focusing_one_field_closes_the_other_list() {
        let mut form = CalculatorForm::new();
        let origin = form.field_mut(Endpoint::Origin);
        origin.edit("Curitiba");
        let query = origin.begin_query("Curitiba").unwrap();
        origin.apply_results(
            query.seq,
            Ok(vec![City {
                name: "Curitiba, PR".to_string(),
                coordinates: LatLon(-25.43, -49.27),
            }]),
        );
        assert!(form.field(Endpoint::Origin).is_list_open());

        form.focus(Endpoint::Destination);
        assert!(!form.field(Endpoint::Origin).is_list_open());
        assert_eq!(form.field(Endpoint::Origin).text(), "Curitiba");
        assert!(!form.field(Endpoint::Destination).is_list_open());
    }

    #[test]
    fn focus_keeps_the_other_confirmation() {
        let mut form = CalculatorForm::new();
        confirm(&mut form, Endpoint::Origin, "Curitiba, PR", LatLon(-25.43, -49.27));
        form.focus(Endpoint::Destination);
        assert!(form.field(Endpoint::Origin).is_confirmed());
        form.focus(Endpoint::Origin);
        assert!(form.field(Endpoint::Origin).is_confirmed());
    }

    #[test]
    fn fields_are_independent() {
        let mut form = CalculatorForm::new();
        form.field_mut(Endpoint::Origin).edit("Rio");
        assert_eq!(form.field(Endpoint::Origin).text(), "Rio");
        assert_eq!(form.field(Endpoint::Destination).text(), "");
    }
}
