//! Runs the classic mixed inventory for a month of simulated days,
//! printing every item in the `<name>, <sell_in>, <quality>` format.
//!
//! ```sh
//! cargo run --example thirty_days
//! ```

use stockrot::{Item, Shop};

fn main() {
    let mut shop = Shop::new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]);

    for day in 0..=30 {
        println!("-------- day {day} --------");
        println!("name, sellIn, quality");
        for item in shop.items() {
            println!("{item}");
        }
        println!();
        shop.advance_day();
    }
}
