//! Diesel table definitions for the sample sales schema.
//!
//! The schema itself is owned by the external database; these definitions
//! mirror it for type-safe SQL generation and must match the live tables.

diesel::table! {
    /// Sales agents.
    agents (agent_code) {
        /// Primary key.
        agent_code -> Varchar,
        /// Display name.
        agent_name -> Varchar,
        /// Sales territory.
        working_area -> Nullable<Varchar>,
        /// Commission rate.
        commission -> Nullable<Numeric>,
        /// Contact phone number.
        phone_no -> Nullable<Varchar>,
        /// Country of residence.
        country -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Companies.
    company (company_id) {
        /// Primary key.
        company_id -> Varchar,
        /// Registered name.
        company_name -> Varchar,
        /// Operating city.
        company_city -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Customers.
    customer (cust_code) {
        /// Primary key.
        cust_code -> Varchar,
        /// Display name.
        cust_name -> Varchar,
        /// City.
        cust_city -> Nullable<Varchar>,
        /// Sales territory.
        working_area -> Nullable<Varchar>,
        /// Country.
        cust_country -> Nullable<Varchar>,
        /// Commercial grade.
        grade -> Nullable<Int4>,
        /// Account opening amount.
        opening_amt -> Numeric,
        /// Amount received to date.
        receive_amt -> Numeric,
        /// Amount paid out to date.
        payment_amt -> Numeric,
        /// Outstanding balance.
        outstanding_amt -> Numeric,
        /// Contact phone number.
        phone_no -> Nullable<Varchar>,
        /// Responsible agent code.
        agent_code -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Orders.
    orders (ord_num) {
        /// Primary key.
        ord_num -> Int4,
        /// Total amount.
        ord_amount -> Numeric,
        /// Advance received.
        advance_amount -> Numeric,
        /// Date placed.
        ord_date -> Date,
        /// Ordering customer code.
        cust_code -> Nullable<Varchar>,
        /// Agent code.
        agent_code -> Nullable<Varchar>,
        /// Free-text description.
        ord_description -> Nullable<Varchar>,
    }
}
