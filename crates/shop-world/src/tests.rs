//! Unit tests for shop-world.

use shop_core::BrandId;
use shop_data::record::{BrandConfig, DailyRecord, MonthlyRecord, RestockEvent};
use shop_data::{Dataset, DatasetBuilder};

/// 60-day, two-month (January/February) fixture with one fully recorded
/// brand.  `days_per_month` comes out to 30.
fn two_month_dataset() -> Dataset {
    let mut daily = Vec::new();
    // NIKE: 100 units sold per day from 10 000, plus a +600 delivery landing
    // on absolute day 40 (day-in-month 11 of February) for a net +500.
    let mut stock = 10_000u32;
    for day in 0..60u32 {
        let (month, day_of_month) = if day < 30 { (1, day + 1) } else { (2, day - 29) };
        let sales = 100;
        let restock = if day == 40 { 600 } else { 0 };
        let stock_after = stock - sales + restock;
        daily.push(DailyRecord {
            day,
            date: format!("2024-{month:02}-{day_of_month:02}"),
            brand: "NIKE".into(),
            demand: sales,
            sales,
            stock_before: stock,
            stock_after,
            revenue: sales as f64 * 100.0,
            stockout: 0,
            lost_sales: 0,
            price_per_unit: 100.0,
            season: "Winter".into(),
            season_type: "High Season".into(),
            quarter: "Q1".into(),
            festival: String::new(),
            festival_multiplier: 1.0,
        });
        stock = stock_after;
    }

    DatasetBuilder::new(60)
        .daily(daily)
        .monthly(vec![
            MonthlyRecord {
                month: 1,
                brand: "NIKE".into(),
                total_sales: 3_000,
                total_revenue: 300_000.0,
                avg_stock: 3_000.0,
                stockout_days: 0,
            },
            MonthlyRecord {
                month: 2,
                brand: "NIKE".into(),
                total_sales: 3_000,
                total_revenue: 300_000.0,
                avg_stock: 2_000.0,
                stockout_days: 0,
            },
            MonthlyRecord {
                month: 1,
                brand: "ADIDAS".into(),
                total_sales: 900,
                total_revenue: 90_000.0,
                avg_stock: 1_000.0,
                stockout_days: 0,
            },
        ])
        .configs(vec![(
            "ADIDAS".into(),
            BrandConfig { initial_stock: 2_000, ..BrandConfig::default() },
        )])
        .restocks(vec![RestockEvent {
            day: 40,
            brand: "NIKE".into(),
            quantity: 600,
            stock_before: 2_800,
            stock_after: 3_400,
        }])
        .build()
        .unwrap()
}

#[cfg(test)]
mod lookup {
    use super::two_month_dataset;
    use crate::lookup::DEFAULT_FALLBACK_STOCK;
    use crate::WorldState;

    #[test]
    fn month_window_arithmetic() {
        let world = WorldState::new(two_month_dataset());
        assert_eq!(world.month_count(), 2);
        assert_eq!(world.days_per_month(), 30);
        assert_eq!(world.actual_month(), 1);
        assert_eq!(world.absolute_day(1), 0);
        assert_eq!(world.absolute_day(30), 29);
    }

    #[test]
    fn second_month_offsets_absolute_days() {
        let mut world = WorldState::new(two_month_dataset());
        world.set_viewed_month(1);
        assert_eq!(world.actual_month(), 2);
        assert_eq!(world.absolute_day(1), 30);
        assert_eq!(world.absolute_day(11), 40);
    }

    #[test]
    fn set_viewed_month_clamps() {
        let mut world = WorldState::new(two_month_dataset());
        world.set_viewed_month(99);
        assert_eq!(world.viewed_month(), 1);
    }

    #[test]
    fn day_one_starting_stock_falls_back() {
        let world = WorldState::new(two_month_dataset());
        let dataset = world.dataset();
        let nike = dataset.roster().id_of("NIKE").unwrap();
        let adidas = dataset.roster().id_of("ADIDAS").unwrap();

        // No in-month record exists for day 0, so day 1 opens on fallbacks:
        // NIKE has no config (4 000 default), ADIDAS is configured at 2 000.
        assert_eq!(world.starting_stock(1, nike), DEFAULT_FALLBACK_STOCK);
        assert_eq!(world.starting_stock(1, adidas), 2_000);
    }

    #[test]
    fn mid_month_starting_stock_is_previous_stock_after() {
        let world = WorldState::new(two_month_dataset());
        let nike = world.dataset().roster().id_of("NIKE").unwrap();
        // Day 2 opens at day 1's stock_after: 10000 - 100.
        assert_eq!(world.starting_stock(2, nike), 9_900);
    }

    #[test]
    fn month_boundary_does_not_leak_previous_month() {
        let mut world = WorldState::new(two_month_dataset());
        world.set_viewed_month(1);
        let nike = world.dataset().roster().id_of("NIKE").unwrap();
        // Day 1 of February: the previous absolute day (29) belongs to
        // January, so the out-of-month guard forces the fallback.
        assert_eq!(world.starting_stock(1, nike), 4_000);
    }

    #[test]
    fn sales_target_defaults_to_zero_without_record() {
        let world = WorldState::new(two_month_dataset());
        let adidas = world.dataset().roster().id_of("ADIDAS").unwrap();
        assert_eq!(world.sales_target(5, adidas), 0);
        let nike = world.dataset().roster().id_of("NIKE").unwrap();
        assert_eq!(world.sales_target(5, nike), 100);
    }

    #[test]
    fn day_plan_falls_back_to_starting_stock() {
        let world = WorldState::new(two_month_dataset());
        let adidas = world.dataset().roster().id_of("ADIDAS").unwrap();
        let plan = world.day_plan(10, adidas);
        // No ADIDAS dailies at all: target collapses onto the starting stock.
        assert_eq!(plan.starting_stock, 2_000);
        assert_eq!(plan.target_stock, 2_000);
        assert_eq!(plan.sales_target, 0);
    }

    #[test]
    fn restock_delta_detected_at_stock_increase() {
        let mut world = WorldState::new(two_month_dataset());
        world.set_viewed_month(1);
        let nike = world.dataset().roster().id_of("NIKE").unwrap();
        // Absolute day 40 gained 600 - 100 = 500 over day 39.
        assert_eq!(world.restock_delta(11, nike), Some(500));
        // Ordinary depletion days have no delta.
        assert_eq!(world.restock_delta(12, nike), None);
        // Day 1 has no in-month previous day.
        assert_eq!(world.restock_delta(1, nike), None);
    }

    #[test]
    fn month_sales_and_restock_events() {
        let mut world = WorldState::new(two_month_dataset());
        let nike = world.dataset().roster().id_of("NIKE").unwrap();
        assert_eq!(world.month_sales(nike), 3_000);

        // The lone restock event (absolute day 40) sits in February's window.
        assert!(world.month_restocks().is_empty());
        world.set_viewed_month(1);
        let events = world.month_restocks();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].quantity, 600);
    }

    #[test]
    fn day_ambient_passthrough() {
        let world = WorldState::new(two_month_dataset());
        let ambient = world.day_ambient(3).unwrap();
        assert_eq!(ambient.season, "Winter");
        assert_eq!(ambient.quarter, "Q1");
    }
}

#[cfg(test)]
mod layout {
    use crate::{FloorPlan, StockBand};

    #[test]
    fn landmarks_inside_canvas() {
        let plan = FloorPlan::new(4);
        for p in [plan.entrance, plan.exit, plan.checkout, plan.warehouse] {
            assert!(p.x >= 0.0 && p.x <= plan.width);
            assert!(p.y >= 0.0 && p.y <= plan.height);
        }
        assert!(plan.exit_boundary_y < plan.height);
    }

    #[test]
    fn shelf_count_matches_slots() {
        for n in [0usize, 1, 2, 5, 9, 23] {
            let plan = FloorPlan::new(n);
            assert_eq!(plan.shelf_count(), n);
            assert!(plan.shelf(n).is_none());
            for slot in 0..n {
                let shelf = plan.shelf(slot).unwrap();
                assert!(shelf.x >= 0.0 && shelf.x <= plan.width, "slot {slot}");
                assert!(shelf.y >= 0.0 && shelf.y <= plan.height, "slot {slot}");
            }
        }
    }

    #[test]
    fn shelves_are_distinct() {
        let plan = FloorPlan::new(6);
        for a in 0..6 {
            for b in (a + 1)..6 {
                assert_ne!(plan.shelf(a), plan.shelf(b), "slots {a} and {b}");
            }
        }
    }

    #[test]
    fn stock_bands() {
        assert_eq!(StockBand::from_level(5_000), StockBand::High);
        assert_eq!(StockBand::from_level(3_001), StockBand::High);
        assert_eq!(StockBand::from_level(3_000), StockBand::Medium);
        assert_eq!(StockBand::from_level(1_001), StockBand::Medium);
        assert_eq!(StockBand::from_level(1_000), StockBand::Low);
        assert_eq!(StockBand::from_level(0), StockBand::Low);
    }
}

#[cfg(test)]
mod selection {
    use super::two_month_dataset;
    use crate::selection::BRAND_PALETTE;
    use crate::BrandSelection;
    use shop_core::ShopError;

    #[test]
    fn resolves_names_in_order() {
        let dataset = two_month_dataset();
        let selection = BrandSelection::from_names(
            dataset.roster(),
            &["ADIDAS".to_string(), "nike".to_string()],
        )
        .unwrap();
        assert_eq!(selection.len(), 2);
        let adidas = dataset.roster().id_of("ADIDAS").unwrap();
        let nike = dataset.roster().id_of("NIKE").unwrap();
        assert_eq!(selection.slot_of(adidas), Some(0));
        assert_eq!(selection.slot_of(nike), Some(1));
    }

    #[test]
    fn duplicate_names_collapse() {
        let dataset = two_month_dataset();
        let selection = BrandSelection::from_names(
            dataset.roster(),
            &["NIKE".to_string(), "nike".to_string()],
        )
        .unwrap();
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let dataset = two_month_dataset();
        let err = BrandSelection::from_names(dataset.roster(), &["PUMA".to_string()])
            .unwrap_err();
        assert!(matches!(err, ShopError::UnknownBrand(_)));
    }

    #[test]
    fn unselected_brand_has_no_slot() {
        let dataset = two_month_dataset();
        let selection =
            BrandSelection::from_names(dataset.roster(), &["NIKE".to_string()]).unwrap();
        let adidas = dataset.roster().id_of("ADIDAS").unwrap();
        assert_eq!(selection.slot_of(adidas), None);
        assert!(!selection.contains(adidas));
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(
            BrandSelection::color_of_slot(0),
            BrandSelection::color_of_slot(BRAND_PALETTE.len())
        );
    }
}
