use crate::models::{Partner, Table};

/// Fixed attendee roster: (id, name, table, seat). The seat references are
/// informational and intentionally inconsistent with the seat map in places
/// (two partners point at A5, Eric Feng points at a free seat); reconciling
/// them is a product decision, not something this layer does quietly.
const SEED: &[(&str, &str, Option<Table>, Option<&str>)] = &[
    ("1", "Ethan Wei", Some(Table::C), Some("C1")),
    ("2", "Eric Young Jung", Some(Table::A), Some("A3")),
    ("3", "Elena Zhang", Some(Table::A), Some("A5")),
    ("4", "Elsa Li", Some(Table::B), Some("B2")),
    ("5", "Elsa Xu", Some(Table::B), Some("B4")),
    ("6", "Mike Liao", Some(Table::A), Some("A7")),
    ("7", "Oliver Huang", Some(Table::A), Some("A10")),
    ("8", "Kong Lijun", Some(Table::A), Some("A11")),
    ("9", "Eric Feng", Some(Table::A), Some("A4")),
    ("10", "Sally Zhang", Some(Table::A), Some("A5")),
    ("11", "Tom Li", Some(Table::A), Some("A12")),
];

/// Read-only directory of the attendees a user can browse and invite. Nothing
/// in this core mutates the roster; construct with [`PartnerDirectory::seeded`]
/// and query away.
#[derive(Debug, Clone)]
pub struct PartnerDirectory {
    partners: Vec<Partner>,
}

impl PartnerDirectory {
    /// Build the fixed eleven-partner roster.
    pub fn seeded() -> Self {
        let partners = SEED
            .iter()
            .map(|&(id, name, table, seat)| Partner {
                id: id.to_string(),
                name: name.to_string(),
                table,
                seat: seat.map(str::to_string),
            })
            .collect();

        Self { partners }
    }

    /// The whole roster in seed order.
    pub fn all(&self) -> &[Partner] {
        &self.partners
    }

    /// Partners expected at the given table, roster order preserved.
    pub fn by_table(&self, table: Table) -> Vec<Partner> {
        self.partners
            .iter()
            .filter(|partner| partner.table == Some(table))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over partner names. A blank query
    /// means "nothing typed yet" and yields an empty list rather than the
    /// full roster, so an empty search box renders an empty result pane.
    pub fn search(&self, query: &str) -> Vec<Partner> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.partners
            .iter()
            .filter(|partner| partner.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(partners: &[Partner]) -> Vec<&str> {
        partners.iter().map(|partner| partner.name.as_str()).collect()
    }

    #[test]
    fn seeded_roster_has_eleven_partners_in_order() {
        let directory = PartnerDirectory::seeded();
        assert_eq!(directory.all().len(), 11);
        assert_eq!(directory.all()[0].name, "Ethan Wei");
        assert_eq!(directory.all()[10].name, "Tom Li");
    }

    #[test]
    fn seed_keeps_the_roster_inconsistencies() {
        // Two partners reference A5 and Eric Feng references a seat the room
        // seeds as available. The data ships that way; keep it that way.
        let directory = PartnerDirectory::seeded();

        let on_a5: Vec<&str> = directory
            .all()
            .iter()
            .filter(|partner| partner.seat.as_deref() == Some("A5"))
            .map(|partner| partner.name.as_str())
            .collect();
        assert_eq!(on_a5, ["Elena Zhang", "Sally Zhang"]);

        let feng = directory
            .all()
            .iter()
            .find(|partner| partner.name == "Eric Feng")
            .unwrap();
        assert_eq!(feng.seat.as_deref(), Some("A4"));
    }

    #[test]
    fn by_table_filters_in_roster_order() {
        let directory = PartnerDirectory::seeded();

        let at_b = directory.by_table(Table::B);
        assert_eq!(names(&at_b), ["Elsa Li", "Elsa Xu"]);

        let at_c = directory.by_table(Table::C);
        assert_eq!(names(&at_c), ["Ethan Wei"]);

        let at_a = directory.by_table(Table::A);
        assert_eq!(at_a.len(), 8);
    }

    #[test]
    fn blank_queries_return_nothing() {
        let directory = PartnerDirectory::seeded();
        assert!(directory.search("").is_empty());
        assert!(directory.search("   ").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring_match() {
        let directory = PartnerDirectory::seeded();

        assert_eq!(names(&directory.search("els")), ["Elsa Li", "Elsa Xu"]);
        assert_eq!(
            names(&directory.search("ERIC")),
            ["Eric Young Jung", "Eric Feng"]
        );
        assert_eq!(
            names(&directory.search("zhang")),
            ["Elena Zhang", "Sally Zhang"]
        );
        assert_eq!(names(&directory.search("lijun")), ["Kong Lijun"]);
        assert!(directory.search("nobody").is_empty());
    }
}
