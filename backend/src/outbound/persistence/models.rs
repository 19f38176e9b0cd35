//! Internal Diesel row structs for database reads.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements; each converts into its domain record.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{Agent, Company, Customer, Order};

use super::schema::{agents, company, customer, orders};

/// Row struct for reading from the agents table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = agents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AgentRow {
    pub agent_code: String,
    pub agent_name: String,
    pub working_area: Option<String>,
    pub commission: Option<BigDecimal>,
    pub phone_no: Option<String>,
    pub country: Option<String>,
}

impl From<AgentRow> for Agent {
    fn from(row: AgentRow) -> Self {
        Self {
            agent_code: row.agent_code,
            agent_name: row.agent_name,
            working_area: row.working_area,
            commission: row.commission,
            phone_no: row.phone_no,
            country: row.country,
        }
    }
}

/// Row struct for reading from the company table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = company)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CompanyRow {
    pub company_id: String,
    pub company_name: String,
    pub company_city: Option<String>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            company_id: row.company_id,
            company_name: row.company_name,
            company_city: row.company_city,
        }
    }
}

/// Row struct for reading from the customer table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CustomerRow {
    pub cust_code: String,
    pub cust_name: String,
    pub cust_city: Option<String>,
    pub working_area: Option<String>,
    pub cust_country: Option<String>,
    pub grade: Option<i32>,
    pub opening_amt: BigDecimal,
    pub receive_amt: BigDecimal,
    pub payment_amt: BigDecimal,
    pub outstanding_amt: BigDecimal,
    pub phone_no: Option<String>,
    pub agent_code: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            cust_code: row.cust_code,
            cust_name: row.cust_name,
            cust_city: row.cust_city,
            working_area: row.working_area,
            cust_country: row.cust_country,
            grade: row.grade,
            opening_amt: row.opening_amt,
            receive_amt: row.receive_amt,
            payment_amt: row.payment_amt,
            outstanding_amt: row.outstanding_amt,
            phone_no: row.phone_no,
            agent_code: row.agent_code,
        }
    }
}

/// Row struct for reading from the orders table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderRow {
    pub ord_num: i32,
    pub ord_amount: BigDecimal,
    pub advance_amount: BigDecimal,
    pub ord_date: NaiveDate,
    pub cust_code: Option<String>,
    pub agent_code: Option<String>,
    pub ord_description: Option<String>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            ord_num: row.ord_num,
            ord_amount: row.ord_amount,
            advance_amount: row.advance_amount,
            ord_date: row.ord_date,
            cust_code: row.cust_code,
            agent_code: row.agent_code,
            ord_description: row.ord_description,
        }
    }
}
