//! Black-box simulation of a small shop floor over a multi-week horizon.

use shelflife_inventory::{Inventory, ItemCategory, ItemSpec, Quality};

fn shop_floor() -> Inventory {
    Inventory::new(vec![
        ItemSpec::new("+5 Dexterity Vest", 10, 20),
        ItemSpec::new("Aged Brie", 2, 0),
        ItemSpec::new("Elixir of the Mongoose", 5, 7),
        ItemSpec::new("Sulfuras, Hand of Ragnaros", 0, 80),
        ItemSpec::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        ItemSpec::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        ItemSpec::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        ItemSpec::new("Conjured Mana Cake", 3, 6),
    ])
    .expect("fixture items are valid")
}

#[test]
fn thirty_days_of_updates_hold_every_invariant() {
    shelflife_observability::init_with_default("debug");

    let mut inventory = shop_floor();
    let names: Vec<String> = inventory
        .items()
        .iter()
        .map(|item| item.name().to_string())
        .collect();

    for day in 1..=30 {
        inventory.update();
        assert_eq!(inventory.len(), names.len(), "day {day} changed the item count");
        for (item, name) in inventory.items().iter().zip(&names) {
            assert_eq!(item.name(), name, "day {day} renamed an item");
            assert!(item.sell_in().value() >= 0, "day {day}: {item} has a negative countdown");
            match item.category() {
                ItemCategory::Legendary => {
                    assert_eq!(item.sell_in().value(), 0);
                    assert_eq!(item.quality(), Quality::LEGENDARY);
                }
                _ => {
                    assert!(
                        Quality::MIN <= item.quality() && item.quality() <= Quality::MAX,
                        "day {day}: {item} left the quality band"
                    );
                }
            }
        }
    }
}

#[test]
fn ticket_trajectory_rises_then_collapses() {
    let mut inventory = Inventory::new(vec![ItemSpec::new(
        "Backstage passes to a TAFKAL80ETC concert",
        12,
        10,
    )])
    .expect("fixture item is valid");

    let expected = [
        (11, 11),
        (10, 12),
        (9, 14),
        (8, 16),
        (7, 18),
        (6, 20),
        (5, 22),
        (4, 25),
        (3, 28),
        (2, 31),
        (1, 34),
        (0, 37),
        (0, 0),
        (0, 0),
    ];

    for (day, (sell_in, quality)) in expected.into_iter().enumerate() {
        let items = inventory.update();
        assert_eq!(
            (items[0].sell_in().value(), items[0].quality().value()),
            (sell_in, quality),
            "unexpected state after day {}",
            day + 1
        );
    }
}

#[test]
fn conjured_stock_decays_exactly_twice_as_fast() {
    let mut inventory = Inventory::new(vec![
        ItemSpec::new("Mana Cake", 5, 20),
        ItemSpec::new("Conjured Mana Cake", 5, 20),
    ])
    .expect("fixture items are valid");

    for day in 1..=6 {
        let before: Vec<i32> = inventory
            .items()
            .iter()
            .map(|item| item.quality().value())
            .collect();
        inventory.update();
        let plain_delta = inventory.items()[0].quality().value() - before[0];
        let conjured_delta = inventory.items()[1].quality().value() - before[1];
        assert_eq!(conjured_delta, 2 * plain_delta, "day {day} broke the 2x rule");
    }

    // Five in-date days then one expired day, at single and double rate.
    assert_eq!(inventory.items()[0].quality().value(), 13);
    assert_eq!(inventory.items()[1].quality().value(), 6);
}

#[test]
fn items_render_as_name_and_counters() {
    let inventory = shop_floor();
    assert_eq!(inventory.items()[0].to_string(), "+5 Dexterity Vest, 10, 20");
    assert_eq!(
        inventory.items()[3].to_string(),
        "Sulfuras, Hand of Ragnaros, 0, 80"
    );
}
