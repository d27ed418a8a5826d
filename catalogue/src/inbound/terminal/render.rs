//! Plain-text rendering of the list, the form and single items.

use std::fmt;

use pagination::PageControls;

use crate::domain::{Equipment, EquipmentForm, FormField, ListPage};

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  list                         show the current page
  sort <key>                   title | price-asc | price-desc | insertion
  next, prev                   move one page
  page <n>                     jump to page n
  filter [text]                filter titles; no text clears the filter
  show <n|id>                  show item n on this page, or the item with that id
  set <field> <value>          field is title | description | manufacturer | price
  form                         show the add-equipment form
  submit                       add the equipment described by the form
  help                         show this text
  quit                         leave";

/// Displays one page of the list with its pagination controls.
pub struct ListDisplay<'a, 'b> {
    page: &'b ListPage<'a>,
    filter: Option<&'b str>,
}

impl<'a, 'b> ListDisplay<'a, 'b> {
    /// Wrap `page`, mentioning `filter` in the heading when set.
    #[must_use]
    pub const fn new(page: &'b ListPage<'a>, filter: Option<&'b str>) -> Self {
        Self { page, filter }
    }
}

impl fmt::Display for ListDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.page;
        write!(
            f,
            "Equipment: {} item(s), sorted by {}",
            page.total_items,
            page.sort_key.label()
        )?;
        if let Some(filter) = self.filter {
            write!(f, ", titles matching \"{filter}\"")?;
        }
        writeln!(f)?;

        if page.total_items == 0 {
            writeln!(f, "  No equipment to show.")?;
        } else if page.items.is_empty() {
            writeln!(
                f,
                "  Nothing on page {} of {}.",
                page.current_page, page.total_pages
            )?;
        }
        for (position, item) in page.items.iter().enumerate() {
            write_summary(f, position.saturating_add(1), item)?;
        }

        if let Some(controls) = &page.controls {
            writeln!(f, "{}", ControlsDisplay(controls))?;
        }
        Ok(())
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, position: usize, item: &Equipment) -> fmt::Result {
    writeln!(f, "  {position}. {}", item.title())?;
    if !item.description().is_empty() {
        writeln!(f, "     {}", item.description())?;
    }
    writeln!(f, "     Manufacturer: {}", item.manufacturer())?;
    writeln!(f, "     Price per hour: {}", item.price_per_hour())
}

struct ControlsDisplay<'a>(&'a PageControls);

impl fmt::Display for ControlsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let controls = self.0;
        let mut parts: Vec<String> = Vec::with_capacity(controls.pages.len().saturating_add(2));
        if controls.previous {
            parts.push("< Prev".to_owned());
        }
        parts.extend(controls.pages.iter().map(|number| {
            if *number == controls.current {
                format!("[{number}]")
            } else {
                number.to_string()
            }
        }));
        if controls.next {
            parts.push("Next >".to_owned());
        }
        write!(f, "  {}", parts.join("  "))
    }
}

/// Displays the add-equipment form with any recorded errors.
pub struct FormDisplay<'a>(pub &'a EquipmentForm);

impl fmt::Display for FormDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;
        writeln!(f, "Add equipment:")?;
        for field in FormField::ALL {
            write!(f, "  {}:", field.label())?;
            let value = form.draft().value(field);
            if value.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, " {value}")?;
            }
            if let Some(error) = form.errors().get(field) {
                writeln!(f, "    ! {error}")?;
            }
        }
        Ok(())
    }
}

/// Displays every field of one item.
pub struct ItemDisplay<'a>(pub &'a Equipment);

impl fmt::Display for ItemDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.0;
        writeln!(f, "{}", item.title())?;
        writeln!(f, "  Id: {}", item.id())?;
        writeln!(f, "  Manufacturer: {}", item.manufacturer())?;
        writeln!(f, "  Price per hour: {}", item.price_per_hour())?;
        if !item.description().is_empty() {
            writeln!(f, "  Description: {}", item.description())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        EquipmentDraft, EquipmentId, ListView, PricePerHour, SequentialIdGenerator,
    };

    fn item(n: u128, title: &str, description: &str, price: f64) -> Equipment {
        Equipment::new(EquipmentDraft {
            id: EquipmentId::from_uuid(Uuid::from_u128(n)),
            title: title.to_owned(),
            description: description.to_owned(),
            manufacturer: "Liebherr".to_owned(),
            price_per_hour: PricePerHour::new(price).expect("valid price"),
        })
        .expect("valid equipment")
    }

    #[fixture]
    fn four_items() -> Vec<Equipment> {
        vec![
            item(1, "Crane LTM 1200", "Mobile crane.", 4000.0),
            item(2, "Crawler crane LR 1300", "", 3500.0),
            item(3, "Tower crane 150 EC-B", "Flat-top.", 2900.0),
            item(4, "Excavator R 926", "Tracked.", 2400.0),
        ]
    }

    #[rstest]
    fn renders_first_page_with_controls(four_items: Vec<Equipment>) {
        let view = ListView::new();
        let page = view.derive(&four_items);

        insta::assert_snapshot!(ListDisplay::new(&page, None).to_string(), @r"
        Equipment: 4 item(s), sorted by Title (A→Z)
          1. Crane LTM 1200
             Mobile crane.
             Manufacturer: Liebherr
             Price per hour: 4000
          2. Crawler crane LR 1300
             Manufacturer: Liebherr
             Price per hour: 3500
          3. Excavator R 926
             Tracked.
             Manufacturer: Liebherr
             Price per hour: 2400
          [1]  2  Next >
        ");
    }

    #[rstest]
    fn renders_last_page(four_items: Vec<Equipment>) {
        let mut view = ListView::new();
        view.next_page(&four_items).expect("second page exists");
        let page = view.derive(&four_items);

        insta::assert_snapshot!(ListDisplay::new(&page, None).to_string(), @r"
        Equipment: 4 item(s), sorted by Title (A→Z)
          1. Tower crane 150 EC-B
             Flat-top.
             Manufacturer: Liebherr
             Price per hour: 2900
          < Prev  1  [2]
        ");
    }

    #[rstest]
    fn heading_names_the_filter(four_items: Vec<Equipment>) {
        let mut view = ListView::new();
        view.set_filter(Some("crane"));
        let page = view.derive(&four_items);

        let rendered = ListDisplay::new(&page, view.filter()).to_string();

        assert!(rendered.starts_with(
            "Equipment: 3 item(s), sorted by Title (A→Z), titles matching \"crane\"\n"
        ));
        assert!(!rendered.contains("Excavator"));
    }

    #[test]
    fn hides_controls_for_a_single_page() {
        let items = vec![item(1, "Crane", "", 100.0)];
        let page = ListView::new().derive(&items);

        let rendered = ListDisplay::new(&page, None).to_string();

        assert!(!rendered.contains("Next"));
        assert!(!rendered.contains("Prev"));
        assert!(!rendered.contains('['));
    }

    #[test]
    fn renders_an_empty_catalogue() {
        let page = ListView::new().derive(&[]);

        insta::assert_snapshot!(ListDisplay::new(&page, None).to_string(), @r"
        Equipment: 0 item(s), sorted by Title (A→Z)
          No equipment to show.
        ");
    }

    #[test]
    fn renders_form_errors_under_their_fields() {
        let mut form = EquipmentForm::new();
        form.set_field(FormField::Title, "Tower crane");
        form.set_field(FormField::PricePerHour, "-5");
        let mut sink = |_: Equipment| {};
        form.submit(&mut sink, &mut SequentialIdGenerator::default())
            .expect_err("invalid form");

        insta::assert_snapshot!(FormDisplay(&form).to_string(), @r"
        Add equipment:
          Title: Tower crane
          Description:
          Manufacturer:
            ! manufacturer required
          Price per hour: -5
            ! price must be a number ≥ 0
        ");
    }

    #[test]
    fn renders_item_details() {
        let crane = item(10, "Crane LTM 1200", "Mobile crane.", 4000.0);

        insta::assert_snapshot!(ItemDisplay(&crane).to_string(), @r"
        Crane LTM 1200
          Id: 00000000-0000-0000-0000-00000000000a
          Manufacturer: Liebherr
          Price per hour: 4000
          Description: Mobile crane.
        ");
    }
}
