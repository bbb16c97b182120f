//! Deals in the layout of the freee deal import CSV.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Column labels of the import file, in output order.
pub const HEADERS: [&str; 21] = [
    "収支区分",
    "管理番号",
    "発生日",
    "決済期日",
    "取引先コード",
    "取引先",
    "勘定科目",
    "税区分",
    "金額",
    "税計算区分",
    "税額",
    "備考",
    "品目",
    "部門",
    "メモタグ（複数指定可、カンマ区切り）",
    "セグメント1",
    "セグメント2",
    "セグメント3",
    "決済日",
    "決済口座",
    "決済金額",
];

pub const TAX_INCLUSIVE: &str = "税込";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealKind {
    Income,
    Expense,
}

impl DealKind {
    pub fn label(self) -> &'static str {
        match self {
            DealKind::Income => "収入",
            DealKind::Expense => "支出",
        }
    }
}

impl Serialize for DealKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxCategory {
    TaxableSales8,
    TaxableSales10,
    TaxablePurchase8,
    TaxablePurchase10,
}

impl TaxCategory {
    pub fn label(self) -> &'static str {
        match self {
            TaxCategory::TaxableSales8 => "課税売上8%",
            TaxCategory::TaxableSales10 => "課税売上10%",
            TaxCategory::TaxablePurchase8 => "課対仕入8%",
            TaxCategory::TaxablePurchase10 => "課対仕入10%",
        }
    }
}

impl Serialize for TaxCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One row of the import file.
///
/// Field order matches [`HEADERS`]. The unused columns are kept so a row always has all 21 cells.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub kind: DealKind,
    pub management_number: String,
    #[serde(with = "crate::date_format")]
    pub occurred_at: NaiveDate,
    #[serde(serialize_with = "crate::date_format::option::serialize")]
    pub settlement_deadline: Option<NaiveDate>,
    pub supplier_code: String,
    pub supplier: String,
    pub account: String,
    pub tax_category: TaxCategory,
    pub amount: i64,
    pub tax_calc_category: &'static str,
    pub tax_cost: String,
    pub remarks: String,
    pub item: String,
    pub department: String,
    pub memo_tags: String,
    pub segment1: String,
    pub segment2: String,
    pub segment3: String,
    #[serde(with = "crate::date_format")]
    pub settled_at: NaiveDate,
    pub settlement_bank_account: &'static str,
    pub settlement_amount: i64,
}

impl Deal {
    /// A deal that is settled in full on the day it occurs, with all optional columns empty.
    pub fn settled_on_occurrence(
        kind: DealKind,
        occurred_at: NaiveDate,
        account: String,
        tax_category: TaxCategory,
        amount: i64,
        remarks: String,
        settlement_bank_account: &'static str,
    ) -> Self {
        Self {
            kind,
            management_number: String::new(),
            occurred_at,
            settlement_deadline: None,
            supplier_code: String::new(),
            supplier: String::new(),
            account,
            tax_category,
            amount,
            tax_calc_category: TAX_INCLUSIVE,
            tax_cost: String::new(),
            remarks,
            item: String::new(),
            department: String::new(),
            memo_tags: String::new(),
            segment1: String::new(),
            segment2: String::new(),
            segment3: String::new(),
            settled_at: occurred_at,
            settlement_bank_account,
            settlement_amount: amount,
        }
    }
}
