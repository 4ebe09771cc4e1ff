use std::collections::HashMap;

use crate::model::{Grade, ParameterResult};
use RecommendationLevel::{Critical, Improve};

pub const PREMIUM_MESSAGE: &str =
    "Kualitas produk sudah memenuhi standar premium. Pertahankan proses produksi saat ini.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecommendationLevel {
    Critical,
    Improve,
}

impl RecommendationLevel {
    pub fn key(&self) -> &'static str {
        match self {
            RecommendationLevel::Critical => "critical",
            RecommendationLevel::Improve => "improve",
        }
    }

    fn for_grade(grade: Grade) -> Option<Self> {
        match grade {
            Grade::C => Some(RecommendationLevel::Critical),
            Grade::B => Some(RecommendationLevel::Improve),
            Grade::A => None,
        }
    }
}

const BUILTIN: &[(&str, &str, RecommendationLevel, &str)] = &[
    ("padi", "patahan", Critical, "Perbaiki proses penggilingan untuk mengurangi butir patah. Pertimbangkan upgrade mesin penggiling."),
    ("padi", "patahan", Improve, "Optimalkan kecepatan penggilingan untuk mengurangi patahan."),
    ("padi", "kadarAir", Critical, "Kadar air terlalu tinggi. Lakukan pengeringan ulang hingga mencapai standar maksimal 14%."),
    ("padi", "kadarAir", Improve, "Tingkatkan proses pengeringan untuk mencapai kadar air optimal."),
    ("padi", "derajatSosoh", Critical, "Derajat sosoh terlalu rendah. Perbaiki proses penyosohan beras."),
    ("padi", "derajatSosoh", Improve, "Tingkatkan derajat sosoh untuk mencapai standar premium."),
    ("padi", "butirMerah", Critical, "Terlalu banyak butir merah. Perbaiki proses sortasi dan grading."),
    ("padi", "butirMerah", Improve, "Lakukan sortasi lebih teliti untuk mengurangi butir merah."),
    ("jagung", "kadarAir", Critical, "Kadar air melebihi batas. Keringkan jagung hingga di bawah 13%."),
    ("jagung", "kadarAir", Improve, "Optimalkan pengeringan untuk mencapai kadar air ideal."),
    ("jagung", "butirRusak", Critical, "Banyak butir rusak. Perbaiki penanganan pasca panen dan penyimpanan."),
    ("jagung", "butirRusak", Improve, "Tingkatkan proses sortasi untuk mengurangi butir rusak."),
    ("jagung", "kotoran", Critical, "Kotoran melebihi standar. Lakukan pembersihan lebih intensif."),
    ("jagung", "kotoran", Improve, "Tambahkan proses pembersihan untuk mengurangi kotoran."),
    ("jagung", "kadarAflatoksin", Critical, "Kadar aflatoksin berbahaya! Jangan dijual untuk konsumsi. Perbaiki penyimpanan."),
    ("jagung", "kadarAflatoksin", Improve, "Perbaiki kondisi penyimpanan untuk mencegah pertumbuhan jamur."),
    ("kopi", "defects", Critical, "Nilai cacat terlalu tinggi. Perbaiki proses sortasi biji kopi."),
    ("kopi", "defects", Improve, "Tingkatkan ketelitian sortasi untuk mengurangi defect."),
    ("kopi", "kadarAir", Critical, "Kadar air tidak optimal. Sesuaikan proses pengeringan."),
    ("kopi", "kadarAir", Improve, "Fine-tune proses pengeringan untuk kadar air 10-12%."),
    ("kopi", "ukuranBiji", Critical, "Ukuran biji tidak seragam. Gunakan screen untuk grading."),
    ("kopi", "ukuranBiji", Improve, "Optimalkan proses grading untuk ukuran biji yang lebih seragam."),
    ("kopi", "warna", Critical, "Keseragaman warna rendah. Perbaiki proses fermentasi dan pengeringan."),
    ("kopi", "warna", Improve, "Tingkatkan konsistensi proses untuk warna yang lebih seragam."),
];

/// Sparse (commodity type, parameter id, level) -> advice table, flattened to
/// `"padi.kadarAir.critical"` keys. Lookups that miss fall back to a generic line.
#[derive(Debug, Clone, Default)]
pub struct RecommendationTable {
    entries: HashMap<String, String>,
}

fn join_key(commodity_type: &str, parameter_id: &str, level: RecommendationLevel) -> String {
    format!("{}.{}.{}", commodity_type, parameter_id, level.key())
}

impl RecommendationTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (commodity_type, parameter_id, level, text) in BUILTIN {
            table.insert(commodity_type, parameter_id, *level, *text);
        }
        table
    }

    pub fn insert(
        &mut self,
        commodity_type: &str,
        parameter_id: &str,
        level: RecommendationLevel,
        text: impl Into<String>,
    ) {
        self.entries
            .insert(join_key(commodity_type, parameter_id, level), text.into());
    }

    pub fn lookup(&self, commodity_type: &str, parameter_id: &str, level: RecommendationLevel) -> String {
        self.entries
            .get(&join_key(commodity_type, parameter_id, level))
            .cloned()
            .unwrap_or_else(|| format!("Perlu perbaikan pada parameter {}.", parameter_id))
    }

    /// One line per B/C parameter in result order; the premium message if none.
    pub fn generate(&self, commodity_type: &str, results: &[ParameterResult]) -> Vec<String> {
        let mut recommendations: Vec<String> = results
            .iter()
            .filter_map(|r| {
                RecommendationLevel::for_grade(r.grade)
                    .map(|level| self.lookup(commodity_type, &r.parameter_id, level))
            })
            .collect();

        if recommendations.is_empty() {
            recommendations.push(PREMIUM_MESSAGE.to_string());
        }
        recommendations
    }
}

/// Generate recommendations with the built-in advice table.
pub fn generate_recommendations(commodity_type: &str, results: &[ParameterResult]) -> Vec<String> {
    RecommendationTable::builtin().generate(commodity_type, results)
}
