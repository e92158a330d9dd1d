//! Rental yield calculator for a purchased property.

use serde::{Deserialize, Serialize};

/// Calculator inputs. Amounts are in won, rates in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub purchase_price: f64,
    pub monthly_rent: f64,
    pub monthly_management_fee: f64,
    pub loan_amount: f64,
    pub loan_interest_rate: f64,
    pub vacancy_rate: f64,
    /// Yearly, not monthly
    pub other_annual_cost: f64,
}

/// Yearly breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReturn {
    pub annual_rent: f64,
    pub annual_management: f64,
    pub annual_loan_interest: f64,
    pub other_cost: f64,
    pub net_income: f64,
    /// Net income over purchase price, in percent
    pub return_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outlook {
    Poor,
    Modest,
    Good,
    Excellent,
}

impl Outlook {
    pub fn for_rate(rate: f64) -> Self {
        if rate < 1.0 {
            Outlook::Poor
        } else if rate < 4.0 {
            Outlook::Modest
        } else if rate < 8.0 {
            Outlook::Good
        } else {
            Outlook::Excellent
        }
    }
}

impl InvestmentInput {
    pub fn calculate(&self) -> InvestmentReturn {
        let annual_rent = self.monthly_rent * 12.0 * (1.0 - self.vacancy_rate / 100.0);
        let annual_management = self.monthly_management_fee * 12.0;
        let annual_loan_interest = self.loan_amount * (self.loan_interest_rate / 100.0);
        let net_income =
            annual_rent - annual_management - annual_loan_interest - self.other_annual_cost;
        let return_rate = if self.purchase_price > 0.0 {
            net_income / self.purchase_price * 100.0
        } else {
            0.0
        };

        InvestmentReturn {
            annual_rent,
            annual_management,
            annual_loan_interest,
            other_cost: self.other_annual_cost,
            net_income,
            return_rate,
        }
    }
}

impl InvestmentReturn {
    pub fn outlook(&self) -> Outlook {
        Outlook::for_rate(self.return_rate)
    }
}
