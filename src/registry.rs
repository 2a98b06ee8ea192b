//! Static content registry for Thodar.
//!
//! The dashboard runs over a fixed, in-memory set of ten simulated implant
//! cases. Nothing here is loaded from disk or mutated at runtime; a real data
//! source would have to produce the same [`ImplantRecord`] shape.

use crate::models::{AlertLevel, FollowUpStatus, ImplantRecord, Laterality, RiskLevel, Sex};

/// Number of records the registry always holds.
pub const RECORD_COUNT: usize = 10;

static RECORDS: [ImplantRecord; RECORD_COUNT] = [
    ImplantRecord {
        id: 1,
        patient_id: "THD-2019-0142",
        age: 67,
        sex: Sex::Female,
        diagnosis: "Primary osteoarthritis, knee",
        comorbidities: "Type 2 diabetes, Hypertension",
        institution: "Kaveri Orthopaedic Centre, Tiruchirappalli",
        surgeon: "Dr. R. Meenakshi",
        implant_category: "Total Knee Arthroplasty",
        manufacturer: "Meridian Ortho",
        model: "MK-PS Posterior Stabilised",
        lot_number: "MK24-118-A",
        material: "CoCr femoral / UHMWPE insert",
        fixation: "Cemented",
        site: "Knee",
        laterality: Laterality::Right,
        surgery_date: "2019-03-14",
        revision_history: "None",
        complications_logged: 0,
        last_review: "2025-02-11",
        next_review: "2026-02-10",
        follow_up: FollowUpStatus::Scheduled,
        alert: AlertLevel::Stable,
        risk: RiskLevel::Low,
    },
    ImplantRecord {
        id: 2,
        patient_id: "THD-2020-0377",
        age: 72,
        sex: Sex::Male,
        diagnosis: "Avascular necrosis, femoral head",
        comorbidities: "Chronic kidney disease stage 2",
        institution: "Coromandel Medical College Hospital, Chennai",
        surgeon: "Dr. S. Arunachalam",
        implant_category: "Total Hip Arthroplasty",
        manufacturer: "Sahyadri Implants",
        model: "SH-Taper Cementless Stem",
        lot_number: "SH20-552-C",
        material: "Titanium stem / Ceramic-on-XLPE",
        fixation: "Uncemented",
        site: "Hip",
        laterality: Laterality::Left,
        surgery_date: "2020-08-02",
        revision_history: "Liner exchange 2023-05 for recurrent dislocation",
        complications_logged: 2,
        last_review: "2024-06-19",
        next_review: "2025-06-18",
        follow_up: FollowUpStatus::Overdue,
        alert: AlertLevel::Attention,
        risk: RiskLevel::High,
    },
    ImplantRecord {
        id: 3,
        patient_id: "THD-2021-0218",
        age: 58,
        sex: Sex::Female,
        diagnosis: "Rheumatoid arthritis, knee",
        comorbidities: "Rheumatoid arthritis on methotrexate",
        institution: "Nilgiri Joint Care Hospital, Coimbatore",
        surgeon: "Dr. K. Vasanthi",
        implant_category: "Total Knee Arthroplasty",
        manufacturer: "Nilgiri Biomech",
        model: "NB-CR Cruciate Retaining",
        lot_number: "NB21-034-F",
        material: "Oxidised zirconium / XLPE",
        fixation: "Cemented",
        site: "Knee",
        laterality: Laterality::Left,
        surgery_date: "2021-11-23",
        revision_history: "None",
        complications_logged: 1,
        last_review: "2025-01-08",
        next_review: "2026-01-07",
        follow_up: FollowUpStatus::Scheduled,
        alert: AlertLevel::Review,
        risk: RiskLevel::Moderate,
    },
    ImplantRecord {
        id: 4,
        patient_id: "THD-2022-0051",
        age: 45,
        sex: Sex::Male,
        diagnosis: "Lumbar spondylolisthesis L4-L5",
        comorbidities: "None recorded",
        institution: "Madurai Spine Institute",
        surgeon: "Dr. P. Ilango",
        implant_category: "Spinal Fusion",
        manufacturer: "Vaigai Spine Systems",
        model: "VS-Pedicle Screw Construct",
        lot_number: "VS22-907-B",
        material: "Ti-6Al-4V / PEEK cage",
        fixation: "Pedicle screw",
        site: "Lumbar spine",
        laterality: Laterality::Midline,
        surgery_date: "2022-02-17",
        revision_history: "None",
        complications_logged: 0,
        last_review: "2025-03-02",
        next_review: "2026-03-01",
        follow_up: FollowUpStatus::Completed,
        alert: AlertLevel::Stable,
        risk: RiskLevel::Low,
    },
    ImplantRecord {
        id: 5,
        patient_id: "THD-2022-0316",
        age: 81,
        sex: Sex::Female,
        diagnosis: "Intertrochanteric fracture, femur",
        comorbidities: "Osteoporosis, Atrial fibrillation",
        institution: "Coromandel Medical College Hospital, Chennai",
        surgeon: "Dr. S. Arunachalam",
        implant_category: "Trauma Fixation",
        manufacturer: "Meridian Ortho",
        model: "MT-Proximal Femoral Nail",
        lot_number: "MT22-441-D",
        material: "Titanium alloy",
        fixation: "Intramedullary nail",
        site: "Femur",
        laterality: Laterality::Right,
        surgery_date: "2022-09-05",
        revision_history: "None",
        complications_logged: 1,
        last_review: "2024-09-12",
        next_review: "2025-03-11",
        follow_up: FollowUpStatus::Overdue,
        alert: AlertLevel::Review,
        risk: RiskLevel::High,
    },
    ImplantRecord {
        id: 6,
        patient_id: "THD-2023-0089",
        age: 63,
        sex: Sex::Male,
        diagnosis: "Rotator cuff arthropathy",
        comorbidities: "Hypertension",
        institution: "Kaveri Orthopaedic Centre, Tiruchirappalli",
        surgeon: "Dr. R. Meenakshi",
        implant_category: "Reverse Shoulder Arthroplasty",
        manufacturer: "Sahyadri Implants",
        model: "SH-RSA Modular",
        lot_number: "SH23-210-E",
        material: "Titanium / UHMWPE",
        fixation: "Press-fit",
        site: "Shoulder",
        laterality: Laterality::Right,
        surgery_date: "2023-04-19",
        revision_history: "None",
        complications_logged: 0,
        last_review: "2025-04-21",
        next_review: "2026-04-20",
        follow_up: FollowUpStatus::Completed,
        alert: AlertLevel::Stable,
        risk: RiskLevel::Low,
    },
    ImplantRecord {
        id: 7,
        patient_id: "THD-2023-0264",
        age: 70,
        sex: Sex::Female,
        diagnosis: "Primary osteoarthritis, hip",
        comorbidities: "Obesity (BMI 33), Hypothyroidism",
        institution: "Nilgiri Joint Care Hospital, Coimbatore",
        surgeon: "Dr. K. Vasanthi",
        implant_category: "Total Hip Arthroplasty",
        manufacturer: "Nilgiri Biomech",
        model: "NB-Dual Mobility Cup",
        lot_number: "NB23-612-A",
        material: "CoCr / Dual-mobility XLPE",
        fixation: "Hybrid",
        site: "Hip",
        laterality: Laterality::Right,
        surgery_date: "2023-10-30",
        revision_history: "None",
        complications_logged: 1,
        last_review: "2025-05-06",
        next_review: "2025-11-05",
        follow_up: FollowUpStatus::Scheduled,
        alert: AlertLevel::Review,
        risk: RiskLevel::Moderate,
    },
    ImplantRecord {
        id: 8,
        patient_id: "THD-2024-0033",
        age: 54,
        sex: Sex::Male,
        diagnosis: "Post-traumatic arthritis, ankle",
        comorbidities: "Smoker",
        institution: "Madurai Spine Institute",
        surgeon: "Dr. P. Ilango",
        implant_category: "Total Ankle Replacement",
        manufacturer: "Vaigai Spine Systems",
        model: "VA-Mobile Bearing Ankle",
        lot_number: "VA24-075-C",
        material: "CoCr / UHMWPE",
        fixation: "Uncemented",
        site: "Ankle",
        laterality: Laterality::Left,
        surgery_date: "2024-01-22",
        revision_history: "Debridement 2024-09 for superficial wound infection",
        complications_logged: 3,
        last_review: "2024-12-03",
        next_review: "2025-06-02",
        follow_up: FollowUpStatus::Overdue,
        alert: AlertLevel::Attention,
        risk: RiskLevel::High,
    },
    ImplantRecord {
        id: 9,
        patient_id: "THD-2024-0190",
        age: 61,
        sex: Sex::Female,
        diagnosis: "Medial compartment osteoarthritis",
        comorbidities: "Type 2 diabetes",
        institution: "Kaveri Orthopaedic Centre, Tiruchirappalli",
        surgeon: "Dr. M. Thirunavukkarasu",
        implant_category: "Unicompartmental Knee",
        manufacturer: "Meridian Ortho",
        model: "MK-Uni Fixed Bearing",
        lot_number: "MK24-330-B",
        material: "CoCr / UHMWPE",
        fixation: "Cemented",
        site: "Knee",
        laterality: Laterality::Left,
        surgery_date: "2024-07-08",
        revision_history: "None",
        complications_logged: 0,
        last_review: "2025-07-14",
        next_review: "2026-07-13",
        follow_up: FollowUpStatus::Scheduled,
        alert: AlertLevel::Stable,
        risk: RiskLevel::Low,
    },
    ImplantRecord {
        id: 10,
        patient_id: "THD-2025-0012",
        age: 39,
        sex: Sex::Male,
        diagnosis: "Tibial plateau fracture (Schatzker V)",
        comorbidities: "None recorded",
        institution: "Coromandel Medical College Hospital, Chennai",
        surgeon: "Dr. A. Fathima",
        implant_category: "Trauma Fixation",
        manufacturer: "Nilgiri Biomech",
        model: "NB-Locking Plate 4.5",
        lot_number: "NB25-009-D",
        material: "316L stainless steel",
        fixation: "Locking plate and screws",
        site: "Tibia",
        laterality: Laterality::Right,
        surgery_date: "2025-01-16",
        revision_history: "None",
        complications_logged: 0,
        last_review: "2025-07-21",
        next_review: "2026-01-19",
        follow_up: FollowUpStatus::Completed,
        alert: AlertLevel::Stable,
        risk: RiskLevel::Moderate,
    },
];

/// Returns every record, in registry order.
pub fn records() -> &'static [ImplantRecord] {
    &RECORDS
}

/// Looks up a record by its unique id.
pub fn find(id: u32) -> Option<&'static ImplantRecord> {
    RECORDS.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_date;
    use std::collections::HashSet;

    #[test]
    fn registry_holds_exactly_ten_records() {
        assert_eq!(records().len(), RECORD_COUNT);
        assert_eq!(RECORD_COUNT, 10);
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = records().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), records().len());

        let patient_ids: HashSet<&str> = records().iter().map(|r| r.patient_id).collect();
        assert_eq!(patient_ids.len(), records().len());
    }

    #[test]
    fn follow_up_status_is_from_closed_set() {
        for record in records() {
            assert!(FollowUpStatus::ALL.contains(&record.follow_up));
            assert_eq!(
                FollowUpStatus::from_label(record.follow_up.label()),
                Some(record.follow_up)
            );
        }
    }

    #[test]
    fn all_dates_parse() {
        for record in records() {
            for date in [record.surgery_date, record.last_review, record.next_review] {
                assert!(parse_date(date).is_some(), "{} has bad date {date}", record.patient_id);
            }
        }
    }

    #[test]
    fn find_returns_matching_record() {
        assert_eq!(find(4).map(|r| r.patient_id), Some("THD-2022-0051"));
        assert!(find(99).is_none());
    }
}
