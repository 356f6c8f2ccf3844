use crate::model::metadata::Metadata;
use crate::model::report::{compound_key, Dimension, Report};
use crate::model::spot::Spot;

pub fn calc_cpv(spend: f64, views: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    // Ties go to even on the exact binary quotient: 10/80 -> 0.12, 3/40 -> 0.07.
    let cpv = spend / views as f64;
    format!("{:.2}", cpv).parse().unwrap_or(cpv)
}

pub fn filter_sum<F>(predicate: F, spots: &[Spot]) -> (f64, u64)
where
    F: Fn(&Spot) -> bool,
{
    spots
        .iter()
        .filter(|spot| predicate(spot))
        .fold((0.0, 0), |(spend, views), spot| {
            (spend + spot.spend, views + spot.views)
        })
}

fn record<F>(report: &mut Report, dimension: Dimension, key: String, spots: &[Spot], predicate: F)
where
    F: Fn(&Spot) -> bool,
{
    let (spend, views) = filter_sum(predicate, spots);
    let cpv = calc_cpv(spend, views);
    // zero CPV values stay out of the report
    if cpv != 0.0 {
        report.insert(dimension, key, cpv);
    }
}

pub fn cpv_by_creative(spots: &[Spot], meta: &Metadata, report: &mut Report) {
    for name in &meta.creative_names {
        record(report, Dimension::Creative, name.clone(), spots, |s| &s.creative == name);
    }
}

pub fn cpv_by_rotation(spots: &[Spot], meta: &Metadata, report: &mut Report) {
    for rotation in &meta.rotation_names {
        record(report, Dimension::Rotation, rotation.clone(), spots, |s| &s.rotation == rotation);
    }
}

pub fn cpv_by_day(spots: &[Spot], meta: &Metadata, report: &mut Report) {
    for day in &meta.spot_days {
        record(report, Dimension::Day, day.to_string(), spots, |s| s.date == *day);
    }
}

pub fn cpv_by_rotation_by_day(spots: &[Spot], meta: &Metadata, report: &mut Report) {
    for rotation in &meta.rotation_names {
        for day in &meta.spot_days {
            let key = compound_key(&[rotation.as_str(), day.to_string().as_str()]);
            record(report, Dimension::RotationByDay, key, spots, |s| {
                &s.rotation == rotation && s.date == *day
            });
        }
    }
}

pub fn cpv_by_rotation_by_creative_by_day(spots: &[Spot], meta: &Metadata, report: &mut Report) {
    for rotation in &meta.rotation_names {
        for creative in &meta.creative_names {
            for day in &meta.spot_days {
                let key = compound_key(&[
                    rotation.as_str(),
                    creative.as_str(),
                    day.to_string().as_str(),
                ]);
                record(report, Dimension::RotationByCreativeByDay, key, spots, |s| {
                    &s.rotation == rotation && &s.creative == creative && s.date == *day
                });
            }
        }
    }
}

pub fn calculate(spots: &[Spot], meta: &Metadata) -> Report {
    let mut report = Report::new();

    cpv_by_creative(spots, meta, &mut report);
    cpv_by_rotation(spots, meta, &mut report);
    cpv_by_day(spots, meta, &mut report);
    cpv_by_rotation_by_day(spots, meta, &mut report);
    cpv_by_rotation_by_creative_by_day(spots, meta, &mut report);

    report
}
