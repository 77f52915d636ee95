//! Performance benchmarks for the shift calculation engine.
//!
//! This benchmark suite verifies that the calculation core meets its
//! performance targets:
//! - Single shift classification: < 10μs mean
//! - One-employee month aggregation: < 1ms mean
//! - Team month aggregation (8 employees): < 5ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, NaiveTime};

use dienstplan_engine::calculation::{HolidayCalendar, build_period, classify};
use dienstplan_engine::config::EngineConfig;
use dienstplan_engine::models::{AbsenceType, Employee, ShiftRecord, ShiftStatus};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn overnight_shift() -> ShiftRecord {
    ShiftRecord {
        id: "shift_bench".to_string(),
        employee_id: "emp_001".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
        planned_start: t(22, 0),
        planned_end: t(6, 0),
        actual_start: None,
        actual_end: None,
        status: ShiftStatus::Confirmed,
        absence: None,
        backup_employee_id: None,
        note: None,
    }
}

/// Builds a January roster: a day and a night shift per employee per day,
/// with a sprinkling of absences and stand-in coverage.
fn month_roster(employee_count: usize) -> (Vec<Employee>, Vec<ShiftRecord>) {
    let employees: Vec<Employee> = (0..employee_count)
        .map(|i| Employee {
            id: format!("emp_{:03}", i),
            name: format!("Assistenz Kraft {}", i),
        })
        .collect();

    let mut shifts = Vec::new();
    for day in 1..=31 {
        let date = NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
        for (i, employee) in employees.iter().enumerate() {
            let (start, end) = if i % 2 == 0 {
                (t(8, 0), t(16, 0))
            } else {
                (t(22, 0), t(6, 0))
            };
            let mut shift = ShiftRecord {
                id: format!("shift_{}_{:02}", employee.id, day),
                employee_id: employee.id.clone(),
                date,
                planned_start: start,
                planned_end: end,
                actual_start: None,
                actual_end: None,
                status: ShiftStatus::Confirmed,
                absence: None,
                backup_employee_id: None,
                note: None,
            };

            // Every 11th shift is a covered sick day.
            if (day as usize + i) % 11 == 0 && employee_count > 1 {
                let backup = &employees[(i + 1) % employee_count];
                shift.status = ShiftStatus::Planned;
                shift.absence = Some(AbsenceType::Sick);
                shift.backup_employee_id = Some(backup.id.clone());
                shifts.push(ShiftRecord {
                    id: format!("coverage_{}_{:02}", backup.id, day),
                    employee_id: backup.id.clone(),
                    date,
                    planned_start: start,
                    planned_end: end,
                    actual_start: None,
                    actual_end: None,
                    status: ShiftStatus::Confirmed,
                    absence: None,
                    backup_employee_id: None,
                    note: Some(format!("Eingesprungen für {}", employee.id)),
                });
            }
            shifts.push(shift);
        }
    }

    (employees, shifts)
}

fn bench_single_classification(c: &mut Criterion) {
    let config = EngineConfig::default();
    let calendar = HolidayCalendar::for_years(&[2026]);
    let shift = overnight_shift();

    c.bench_function("classify_overnight_shift", |b| {
        b.iter(|| classify(black_box(&shift), &config, &calendar))
    });
}

fn bench_month_aggregation(c: &mut Criterion) {
    let config = EngineConfig::default();
    let calendar = HolidayCalendar::for_years(&[2026]);

    let mut group = c.benchmark_group("month_aggregation");
    for employee_count in [1, 8, 32] {
        let (employees, shifts) = month_roster(employee_count);
        group.throughput(Throughput::Elements(shifts.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &(employees, shifts),
            |b, (employees, shifts)| {
                b.iter(|| build_period(black_box(employees), black_box(shifts), &config, &calendar))
            },
        );
    }
    group.finish();
}

fn bench_holiday_calendar(c: &mut Criterion) {
    c.bench_function("holiday_calendar_for_year", |b| {
        b.iter(|| HolidayCalendar::for_years(black_box(&[2026])))
    });
}

criterion_group!(
    benches,
    bench_single_classification,
    bench_month_aggregation,
    bench_holiday_calendar
);
criterion_main!(benches);
