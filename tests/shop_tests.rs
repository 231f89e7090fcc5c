use stockrot::{Item, ItemError, Shop};

/// All items are updated in one pass, and names are untouched.
#[test]
fn test_advance_day_decrements_all_values() {
    let mut shop = Shop::new(vec![Item::new("foo", 10, 20), Item::new("bar", 30, 40)]);

    shop.advance_day();
    let [item1, item2] = shop.items() else {
        panic!("expected two items");
    };
    assert_eq!(item1.name(), "foo");
    assert_eq!((item1.sell_in, item1.quality), (9, 19));
    assert_eq!(item2.name(), "bar");
    assert_eq!((item2.sell_in, item2.quality), (29, 39));
}

/// Item order only decides presentation; outcomes are identical however
/// the collection is arranged.
#[test]
fn test_item_order_does_not_affect_outcomes() {
    let forward = vec![
        Item::new("foo", 5, 10),
        Item::new("Aged Brie", 5, 10),
        Item::new("Conjured Mana Cake", 5, 10),
    ];
    let reversed: Vec<Item> = forward.iter().rev().cloned().collect();

    let mut shop_fwd = Shop::new(forward);
    let mut shop_rev = Shop::new(reversed);
    shop_fwd.advance_days(8);
    shop_rev.advance_days(8);

    let mut fwd_items = shop_fwd.into_items();
    fwd_items.reverse();
    assert_eq!(fwd_items, shop_rev.into_items());
}

/// The mixed inventory from the classic fixture, two days in.
#[test]
fn test_mixed_inventory_snapshot() {
    let mut shop = Shop::new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Conjured Mana Cake", 3, 6),
    ]);

    shop.advance_days(2);

    let rendered: Vec<String> = shop.items().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "+5 Dexterity Vest, 8, 18",
            "Aged Brie, 0, 2",
            "Elixir of the Mongoose, 3, 5",
            "Sulfuras, Hand of Ragnaros, 0, 80",
            "Backstage passes to a TAFKAL80ETC concert, 13, 22",
            "Conjured Mana Cake, 1, 2",
        ]
    );
}

/// The permissive constructor takes the inventory as given; the
/// validating one reports what the permissive one would have let through.
#[test]
fn test_validated_construction_extension() {
    assert!(Item::validated("foo", 10, 20).is_ok());

    for illegal in [-1, 51] {
        assert_eq!(
            Item::validated("foo", 10, illegal),
            Err(ItemError::QualityOutOfRange { quality: illegal })
        );
        // Default path stays permissive
        assert_eq!(Item::new("foo", 10, illegal).quality, illegal);
    }

    assert_eq!(
        Item::validated("Sulfuras, Hand of Ragnaros", 0, 79),
        Err(ItemError::LegendaryQualityMismatch { quality: 79 })
    );
}

/// An inventory snapshot survives a JSON round trip, cached
/// classification included.
#[test]
fn test_shop_serde_round_trip() {
    let mut shop = Shop::new(vec![
        Item::new("Aged Brie", 2, 0),
        Item::new("Conjured Mana Cake", 3, 6),
    ]);
    shop.advance_day();

    let json = serde_json::to_string(&shop).expect("serialize");
    let restored: Shop = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, shop);

    // Derived state is recomputed, so the restored shop keeps aging the
    // same way the original would
    let mut original = shop;
    let mut restored = restored;
    original.advance_days(4);
    restored.advance_days(4);
    assert_eq!(original, restored);
}

/// Items deserialize from the plain three-field wire shape.
#[test]
fn test_item_deserializes_from_plain_record() {
    let item: Item =
        serde_json::from_str(r#"{"name": "Aged Brie", "sell_in": 2, "quality": 0}"#)
            .expect("deserialize");
    assert_eq!(item.name(), "Aged Brie");
    assert_eq!(item.category(), stockrot::Category::Aging);
}
