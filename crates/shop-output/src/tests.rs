//! Integration tests for shop-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{FrameSummaryRow, StockLevelRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn frame_row(tick: u64) -> FrameSummaryRow {
        FrameSummaryRow {
            tick,
            day_in_month:  1,
            customers:     tick,
            employees:     0,
            total_spawned: tick,
        }
    }

    fn stock_row(brand_id: u16) -> StockLevelRow {
        StockLevelRow {
            day_in_month: 1,
            brand_id,
            slot:  brand_id as usize,
            level: 4_000,
            band:  "high".into(),
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("frame_summaries.csv").exists());
        assert!(dir.path().join("stock_levels.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "day_in_month", "customers", "employees", "total_spawned"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("stock_levels.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["day_in_month", "brand_id", "slot", "level", "band"]);
    }

    #[test]
    fn csv_frame_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frame_summary(&frame_row(0)).unwrap();
        w.write_frame_summary(&frame_row(1)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0"); // tick
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "1"); // day_in_month
    }

    #[test]
    fn csv_stock_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_stock_levels(&[stock_row(0), stock_row(1)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("stock_levels.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "0"); // brand_id
        assert_eq!(&rows[0][3], "4000");
        assert_eq!(&rows[1][4], "high");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_stock_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_stock_levels(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use shop_core::{Millis, ReplayConfig};
        use shop_data::record::{DailyRecord, MonthlyRecord};
        use shop_data::DatasetBuilder;
        use shop_engine::EngineBuilder;

        use crate::observer::ReplayOutputObserver;

        let daily = (0..10u32)
            .map(|day| DailyRecord {
                day,
                date: format!("2024-01-{:02}", day + 1),
                brand: "NIKE".into(),
                demand: 50,
                sales: 50,
                stock_before: 5_000 - day * 50,
                stock_after: 5_000 - (day + 1) * 50,
                revenue: 5_000.0,
                stockout: 0,
                lost_sales: 0,
                price_per_unit: 100.0,
                season: "Winter".into(),
                season_type: "High Season".into(),
                quarter: "Q1".into(),
                festival: String::new(),
                festival_multiplier: 1.0,
            })
            .collect();
        let dataset = DatasetBuilder::new(10)
            .daily(daily)
            .monthly(vec![MonthlyRecord {
                month: 1,
                brand: "NIKE".into(),
                total_sales: 500,
                total_revenue: 50_000.0,
                avg_stock: 4_750.0,
                stockout_days: 0,
            }])
            .build()
            .unwrap();

        let mut engine = EngineBuilder::new(dataset)
            .config(ReplayConfig::with_seed(9))
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = ReplayOutputObserver::new(writer);
        for tick in 0..5u64 {
            engine.tick(Millis(tick as f64 * 16.0), &mut obs);
        }
        assert!(obs.take_error().is_none(), "no write errors expected");
        let mut writer = obs.into_writer();
        writer.finish().unwrap();

        // Five running ticks → five frame rows, all within day 1.
        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| &r[1] == "1"));

        // One brand, one day boundary seen → one stock row, at the fallback
        // level (NIKE has no config row).
        let mut rdr2 = csv::Reader::from_path(dir.path().join("stock_levels.csv")).unwrap();
        let stock: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(stock.len(), 1);
        assert_eq!(&stock[0][3], "4000");
        assert_eq!(&stock[0][4], "high");
    }
}
