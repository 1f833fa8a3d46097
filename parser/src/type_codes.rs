use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::warn;

use crate::error::RecordError;
use crate::model::TransactionType::{self, Credit, Debit};
use crate::model::TypeCodeLevel::{self, Detail, Status, Summary};

/// Описание type code из справочника BAI2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeCode {
    /// кредит/дебет, у статусных кодов - `None`
    pub transaction_type: Option<TransactionType>,
    pub level: Option<TypeCodeLevel>,
    pub description: &'static str,
}

/// Справочник по https://github.com/mrrozz/bai2-codes-csv
static TYPE_CODES: Lazy<HashMap<&'static str, TypeCode>> = Lazy::new(|| {
    TYPE_CODE_TABLE
        .iter()
        .map(|&(code, transaction_type, level, description)| {
            (
                code,
                TypeCode {
                    transaction_type,
                    level: Some(level),
                    description,
                },
            )
        })
        .collect()
});

/// Ищет type code в справочнике
pub fn lookup(code: &str) -> Option<&'static TypeCode> {
    TYPE_CODES.get(code.trim())
}

/// Детали type code
///
/// При `ignore_if_not_found = true` для неизвестного кода возвращает пустое описание
/// и пишет предупреждение, иначе - [`RecordError::UnknownTypeCode`].
pub fn type_code_details(code: &str, ignore_if_not_found: bool) -> Result<TypeCode, RecordError> {
    match lookup(code) {
        Some(details) => Ok(*details),
        None if ignore_if_not_found => {
            warn!(type_code = code, "type code not found, returning empty details");
            Ok(TypeCode::default())
        }
        None => Err(RecordError::UnknownTypeCode(code.trim().to_string())),
    }
}

#[rustfmt::skip]
const TYPE_CODE_TABLE: &[(&str, Option<TransactionType>, TypeCodeLevel, &str)] = &[
    ("010", None, Status, "Opening Ledger"),
    ("011", None, Status, "Average Opening Ledger MTD"),
    ("012", None, Status, "Average Opening Ledger YTD"),
    ("015", None, Status, "Closing Ledger"),
    ("020", None, Status, "Average Closing Ledger MTD"),
    ("021", None, Status, "Average Closing Ledger – Previous Month"),
    ("022", None, Status, "Aggregate Balance Adjustments"),
    ("024", None, Status, "Average Closing Ledger YTD – Previous Month"),
    ("025", None, Status, "Average Closing Ledger YTD"),
    ("030", None, Status, "Current Ledger"),
    ("037", None, Status, "ACH Net Position"),
    ("039", None, Status, "Opening Available + Total Same-Day ACH DTC Deposit"),
    ("040", None, Status, "Opening Available"),
    ("041", None, Status, "Average Opening Available MTD"),
    ("042", None, Status, "Average Opening Available YTD"),
    ("043", None, Status, "Average Available – Previous Month"),
    ("044", None, Status, "Disbursing Opening Available Balance"),
    ("045", None, Status, "Status Closing Available"),
    ("050", None, Status, "Average Closing Available MTD"),
    ("051", None, Status, "Average Closing Available – Last Month"),
    ("054", None, Status, "Average Closing Available YTD – Last Month"),
    ("055", None, Status, "Average Closing Available YTD"),
    ("056", None, Status, "Loan Balance"),
    ("057", None, Status, "Total Investment Position"),
    ("059", None, Status, "Current Available (CRS Supressed)"),
    ("060", None, Status, "Current Available"),
    ("061", None, Status, "Average Current Available MTD"),
    ("062", None, Status, "Average Current Available YTD"),
    ("063", None, Status, "Total Float"),
    ("065", None, Status, "Target Balance"),
    ("066", None, Status, "Adjusted Balance"),
    ("067", None, Status, "Adjusted Balance MTD"),
    ("068", None, Status, "Adjusted Balance YTD"),
    ("070", None, Status, "0-Day Float"),
    ("072", None, Status, "1-Day Float"),
    ("073", None, Status, "Float Adjustment"),
    ("074", None, Status, "2 or More Days Float"),
    ("075", None, Status, "3 or More Days Float"),
    ("076", None, Status, "Adjustment to Balances"),
    ("077", None, Status, "Average Adjustment to Balances MTD"),
    ("078", None, Status, "Average Adjustment to Balances YTD"),
    ("079", None, Status, "4-Day Float"),
    ("080", None, Status, "5-Day Float"),
    ("081", None, Status, "6-Day Float"),
    ("082", None, Status, "Average 1-Day Float MTD"),
    ("083", None, Status, "Average 1-Day Float YTD"),
    ("084", None, Status, "Average 2-Day Float MTD"),
    ("085", None, Status, "Average 2-Day Float YTD"),
    ("086", None, Status, "Transfer Calculation"),
    ("100", Some(Credit), Summary, "Total Credits"),
    ("101", Some(Credit), Summary, "Total Credit Amount MTD"),
    ("105", Some(Credit), Summary, "Credits Not Detailed"),
    ("106", Some(Credit), Summary, "Deposits Subject to Float"),
    ("107", Some(Credit), Summary, "Total Adjustment Credits YTD"),
    ("108", Some(Credit), Detail, "Credit (Any Type)"),
    ("109", Some(Credit), Summary, "Current Day Total Lockbox Deposits"),
    ("110", Some(Credit), Summary, "Total Lockbox Deposits"),
    ("115", Some(Credit), Detail, "Lockbox Deposit"),
    ("116", Some(Credit), Detail, "Item in Lockbox Deposit"),
    ("118", Some(Credit), Detail, "Lockbox Adjustment Credit"),
    ("120", Some(Credit), Summary, "EDI* Transaction Credit"),
    ("121", Some(Credit), Detail, "EDI Transaction Credit"),
    ("122", Some(Credit), Detail, "EDIBANX Credit Received"),
    ("123", Some(Credit), Detail, "EDIBANX Credit Return"),
    ("130", Some(Credit), Summary, "Total Concentration Credits"),
    ("131", Some(Credit), Summary, "Total DTC Credits"),
    ("135", Some(Credit), Detail, "DTC Concentration Credit"),
    ("136", Some(Credit), Detail, "Item in DTC Deposit"),
    ("140", Some(Credit), Summary, "Total ACH Credits"),
    ("142", Some(Credit), Detail, "ACH Credit Received"),
    ("143", Some(Credit), Detail, "Item in ACH Deposit"),
    ("145", Some(Credit), Detail, "ACH Concentration Credit"),
    ("146", Some(Credit), Summary, "Total Bank Card Deposits"),
    ("147", Some(Credit), Detail, "Individual Bank Card Deposit"),
    ("150", Some(Credit), Summary, "Total Preauthorized Payment Credits"),
    ("155", Some(Credit), Detail, "Preauthorized Draft Credit"),
    ("156", Some(Credit), Detail, "Item in PAC Deposit"),
    ("160", Some(Credit), Summary, "Total ACH Disbursing Funding Credits"),
    ("162", Some(Credit), Summary, "Corporate Trade Payment Settlement"),
    ("163", Some(Credit), Summary, "Corporate Trade Payment Credits"),
    ("164", Some(Credit), Detail, "Corporate Trade Payment Credit"),
    ("165", Some(Credit), Detail, "Preauthorized ACH Credit"),
    ("166", Some(Credit), Detail, "ACH Settlement"),
    ("167", Some(Credit), Summary, "ACH Settlement Credits"),
    ("168", Some(Credit), Detail, "ACH Return Item or Adjustment Settlement"),
    ("169", Some(Credit), Detail, "Miscellaneous ACH Credit"),
    ("170", Some(Credit), Summary, "Total Other Check Deposits"),
    ("171", Some(Credit), Detail, "Individual Loan Deposit"),
    ("172", Some(Credit), Detail, "Deposit Correction"),
    ("173", Some(Credit), Detail, "Bank-Prepared Deposit"),
    ("174", Some(Credit), Detail, "Other Deposit"),
    ("175", Some(Credit), Detail, "Check Deposit Package"),
    ("176", Some(Credit), Detail, "Re-presented Check Deposit"),
    ("178", Some(Credit), Summary, "List Post Credits"),
    ("180", Some(Credit), Summary, "Total Loan Proceeds"),
    ("182", Some(Credit), Summary, "Total Bank-Prepared Deposits"),
    ("184", Some(Credit), Detail, "Draft Deposit"),
    ("185", Some(Credit), Summary, "Total Miscellaneous Deposits"),
    ("186", Some(Credit), Summary, "Total Cash Letter Credits"),
    ("187", Some(Credit), Detail, "Cash Letter Credit"),
    ("188", Some(Credit), Summary, "Total Cash Letter Adjustments"),
    ("189", Some(Credit), Detail, "Cash Letter Adjustment"),
    ("190", Some(Credit), Summary, "Total Incoming Money Transfers"),
    ("191", Some(Credit), Detail, "Individual Incoming Internal Money Transfer"),
    ("195", Some(Credit), Detail, "Incoming Money Transfer"),
    ("196", Some(Credit), Detail, "Money Transfer Adjustment"),
    ("198", Some(Credit), Detail, "Compensation"),
    ("200", Some(Credit), Summary, "Total Automatic Transfer Credits"),
    ("201", Some(Credit), Detail, "Individual Automatic Transfer Credit"),
    ("202", Some(Credit), Detail, "Bond Operations Credit"),
    ("205", Some(Credit), Summary, "Total Book Transfer Credits"),
    ("206", Some(Credit), Detail, "Book Transfer Credit"),
    ("207", Some(Credit), Summary, "Total International Money Transfer Credits"),
    ("208", Some(Credit), Detail, "Individual International Money Transfer Credit"),
    ("210", Some(Credit), Summary, "Total International Credits"),
    ("212", Some(Credit), Detail, "Foreign Letter of Credit"),
    ("213", Some(Credit), Detail, "Letter of Credit"),
    ("214", Some(Credit), Detail, "Foreign Exchange of Credit"),
    ("215", Some(Credit), Summary, "Total Letters of Credit"),
    ("216", Some(Credit), Detail, "Foreign Remittance Credit"),
    ("218", Some(Credit), Detail, "Foreign Collection Credit"),
    ("221", Some(Credit), Detail, "Foreign Check Purchase"),
    ("222", Some(Credit), Detail, "Foreign Checks Deposited"),
    ("224", Some(Credit), Detail, "Commission"),
    ("226", Some(Credit), Detail, "International Money Market Trading"),
    ("227", Some(Credit), Detail, "Standing Order"),
    ("229", Some(Credit), Detail, "Miscellaneous International Credit"),
    ("230", Some(Credit), Summary, "Total Security Credits"),
    ("231", Some(Credit), Summary, "Total Collection Credits"),
    ("232", Some(Credit), Detail, "Sale of Debt Security"),
    ("233", Some(Credit), Detail, "Securities Sold"),
    ("234", Some(Credit), Detail, "Sale of Equity Security"),
    ("235", Some(Credit), Detail, "Matured Reverse Repurchase Order"),
    ("236", Some(Credit), Detail, "Maturity of Debt Security"),
    ("237", Some(Credit), Detail, "Individual Collection Credit"),
    ("238", Some(Credit), Detail, "Collection of Dividends"),
    ("239", Some(Credit), Summary, "Total Bankers’ Acceptance Credits"),
    ("240", Some(Credit), Detail, "Coupon Collections – Banks"),
    ("241", Some(Credit), Detail, "Bankers’ Acceptances"),
    ("242", Some(Credit), Detail, "Collection of Interest Income"),
    ("243", Some(Credit), Detail, "Matured Fed Funds Purchased"),
    ("244", Some(Credit), Detail, "Interest/Matured Principal Payment"),
    ("245", Some(Credit), Summary, "Monthly Dividends"),
    ("246", Some(Credit), Detail, "Commercial Paper"),
    ("247", Some(Credit), Detail, "Capital Change"),
    ("248", Some(Credit), Detail, "Savings Bonds Sales Adjustment"),
    ("249", Some(Credit), Detail, "Miscellaneous Security Credit"),
    ("250", Some(Credit), Summary, "Total Checks Posted and Returned"),
    ("251", Some(Credit), Summary, "Total Debit Reversals"),
    ("252", Some(Credit), Detail, "Debit Reversal"),
    ("254", Some(Credit), Detail, "Posting Error Correction Credit"),
    ("255", Some(Credit), Detail, "Check Posted and Returned"),
    ("256", Some(Credit), Summary, "Total ACH Return Items"),
    ("257", Some(Credit), Detail, "Individual ACH Return Item"),
    ("258", Some(Credit), Detail, "ACH Reversal Credit"),
    ("260", Some(Credit), Summary, "Total Rejected Credits"),
    ("261", Some(Credit), Detail, "Individual Rejected Credit"),
    ("263", Some(Credit), Detail, "Overdraft"),
    ("266", Some(Credit), Detail, "Return Item"),
    ("268", Some(Credit), Detail, "Return Item Adjustment"),
    ("270", Some(Credit), Summary, "Total ZBA Credits"),
    ("271", Some(Credit), Summary, "Net Zero-Balance Amount"),
    ("274", Some(Credit), Detail, "Cumulative** ZBA or Disbursement Credits"),
    ("275", Some(Credit), Detail, "ZBA Credit"),
    ("276", Some(Credit), Detail, "ZBA Float Adjustment"),
    ("277", Some(Credit), Detail, "ZBA Credit Transfer"),
    ("278", Some(Credit), Detail, "ZBA Credit Adjustment"),
    ("280", Some(Credit), Summary, "Total Controlled Disbursing Credits"),
    ("281", Some(Credit), Detail, "Individual Controlled Disbursing Credit"),
    ("285", Some(Credit), Summary, "Total DTC Disbursing Credits"),
    ("286", Some(Credit), Detail, "Individual DTC Disbursing Credit"),
    ("294", Some(Credit), Summary, "Total ATM Credits"),
    ("295", Some(Credit), Detail, "ATM Credit"),
    ("301", Some(Credit), Detail, "Commercial Deposit"),
    ("302", Some(Credit), Summary, "Correspondent Bank Deposit"),
    ("303", Some(Credit), Summary, "Total Wire Transfers In – FF"),
    ("304", Some(Credit), Summary, "Total Wire Transfers In – CHF"),
    ("305", Some(Credit), Summary, "Total Fed Funds Sold"),
    ("306", Some(Credit), Detail, "Fed Funds Sold"),
    ("307", Some(Credit), Summary, "Total Trust Credits"),
    ("308", Some(Credit), Detail, "Trust Credit"),
    ("309", Some(Credit), Summary, "Total Value - Dated Funds"),
    ("310", Some(Credit), Summary, "Total Commercial Deposits"),
    ("315", Some(Credit), Summary, "Total International Credits – FF"),
    ("316", Some(Credit), Summary, "Total International Credits – CHF"),
    ("318", Some(Credit), Summary, "Total Foreign Check Purchased"),
    ("319", Some(Credit), Summary, "Late Deposit"),
    ("320", Some(Credit), Summary, "Total Securities Sold – FF"),
    ("321", Some(Credit), Summary, "Total Securities Sold – CHF"),
    ("324", Some(Credit), Summary, "Total Securities Matured – FF"),
    ("325", Some(Credit), Summary, "Total Securities Matured – CHF"),
    ("326", Some(Credit), Summary, "Total Securities Interest"),
    ("327", Some(Credit), Summary, "Total Securities Matured"),
    ("328", Some(Credit), Summary, "Total Securities Interest – FF"),
    ("329", Some(Credit), Summary, "Total Securities Interest – CHF"),
    ("330", Some(Credit), Summary, "Total Escrow Credits"),
    ("331", Some(Credit), Detail, "Individual Escrow Credit"),
    ("332", Some(Credit), Summary, "Total Miscellaneous Securities Credits – FF"),
    ("336", Some(Credit), Summary, "Total Miscellaneous Securities Credits – CHF"),
    ("338", Some(Credit), Summary, "Total Securities Sold"),
    ("340", Some(Credit), Summary, "Total Broker Deposits"),
    ("341", Some(Credit), Summary, "Total Broker Deposits – FF"),
    ("342", Some(Credit), Detail, "Broker Deposit"),
    ("343", Some(Credit), Summary, "Total Broker Deposits – CHF"),
    ("344", Some(Credit), Detail, "Individual Back Value Credit"),
    ("345", Some(Credit), Detail, "Item in Brokers Deposit"),
    ("346", Some(Credit), Detail, "Sweep Interest Income"),
    ("347", Some(Credit), Detail, "Sweep Principal Sell"),
    ("348", Some(Credit), Detail, "Futures Credit"),
    ("349", Some(Credit), Detail, "Principal Payments Credit"),
    ("350", Some(Credit), Summary, "Investment Sold"),
    ("351", Some(Credit), Detail, "Individual Investment Sold"),
    ("352", Some(Credit), Summary, "Total Cash Center Credits"),
    ("353", Some(Credit), Detail, "Cash Center Credit"),
    ("354", Some(Credit), Detail, "Interest Credit"),
    ("355", Some(Credit), Summary, "Investment Interest"),
    ("356", Some(Credit), Summary, "Total Credit Adjustment"),
    ("357", Some(Credit), Detail, "Credit Adjustment"),
    ("358", Some(Credit), Detail, "YTD Adjustment Credit"),
    ("359", Some(Credit), Detail, "Interest Adjustment Credit"),
    ("360", Some(Credit), Summary, "Total Credits Less Wire Transfer and Returned Checks"),
    ("361", Some(Credit), Summary, "Grand Total Credits Less Grand Total Debits"),
    ("362", Some(Credit), Detail, "Correspondent Collection"),
    ("363", Some(Credit), Detail, "Correspondent Collection Adjustment"),
    ("364", Some(Credit), Detail, "Loan Participation"),
    ("366", Some(Credit), Detail, "Currency and Coin Deposited"),
    ("367", Some(Credit), Detail, "Food Stamp Letter"),
    ("368", Some(Credit), Detail, "Food Stamp Adjustment"),
    ("369", Some(Credit), Detail, "Clearing Settlement Credit"),
    ("370", Some(Credit), Summary, "Total Back Value Credits"),
    ("372", Some(Credit), Detail, "Back Value Adjustment"),
    ("373", Some(Credit), Detail, "Customer Payroll"),
    ("374", Some(Credit), Detail, "FRB Statement Recap"),
    ("376", Some(Credit), Detail, "Savings Bond Letter or Adjustment"),
    ("377", Some(Credit), Detail, "Treasury Tax and Loan Credit"),
    ("378", Some(Credit), Detail, "Transfer of Treasury Credit"),
    ("379", Some(Credit), Detail, "FRB Government Checks Cash Letter Credit"),
    ("381", Some(Credit), Detail, "FRB Government Check Adjustment"),
    ("382", Some(Credit), Detail, "FRB Postal Money Order Credit"),
    ("383", Some(Credit), Detail, "FRB Postal Money Order Adjustment"),
    ("384", Some(Credit), Detail, "FRB Cash Letter Auto Charge Credit"),
    ("385", Some(Credit), Summary, "Total Universal Credits"),
    ("386", Some(Credit), Detail, "FRB Cash Letter Auto Charge Adjustment"),
    ("387", Some(Credit), Detail, "FRB Fine-Sort Cash Letter Credit"),
    ("388", Some(Credit), Detail, "FRB Fine-Sort Adjustment"),
    ("389", Some(Credit), Summary, "Total Freight Payment Credits"),
    ("390", Some(Credit), Summary, "Total Miscellaneous Credits"),
    ("391", Some(Credit), Detail, "Universal Credit"),
    ("392", Some(Credit), Detail, "Freight Payment Credit"),
    ("393", Some(Credit), Detail, "Itemized Credit Over $10,000"),
    ("394", Some(Credit), Detail, "Cumulative** Credits"),
    ("395", Some(Credit), Detail, "Check Reversal"),
    ("397", Some(Credit), Detail, "Float Adjustment"),
    ("398", Some(Credit), Detail, "Miscellaneous Fee Refund"),
    ("399", Some(Credit), Detail, "Miscellaneous Credit"),
    ("400", Some(Debit), Summary, "Total Debits"),
    ("401", Some(Debit), Summary, "Total Debit Amount MTD"),
    ("403", Some(Debit), Summary, "Today’s Total Debits"),
    ("405", Some(Debit), Summary, "Total Debit Less Wire Transfers and Charge- Backs"),
    ("406", Some(Debit), Summary, "Debits not Detailed"),
    ("408", Some(Debit), Detail, "Float Adjustment"),
    ("409", Some(Debit), Detail, "Debit (Any Type)"),
    ("410", Some(Debit), Summary, "Total YTD Adjustment"),
    ("412", Some(Debit), Summary, "Total Debits (Excluding Returned Items)"),
    ("415", Some(Debit), Detail, "Lockbox Debit"),
    ("416", Some(Debit), Summary, "Total Lockbox Debits"),
    ("420", Some(Debit), Summary, "EDI Transaction Debits"),
    ("421", Some(Debit), Detail, "EDI Transaction Debit"),
    ("422", Some(Debit), Detail, "EDIBANX Settlement Debit"),
    ("423", Some(Debit), Detail, "EDIBANX Return Item Debit"),
    ("430", Some(Debit), Summary, "Total Payable–Through Drafts"),
    ("435", Some(Debit), Detail, "Payable–Through Draft"),
    ("445", Some(Debit), Detail, "ACH Concentration Debit"),
    ("446", Some(Debit), Summary, "Total ACH Disbursement Funding Debits"),
    ("447", Some(Debit), Detail, "ACH Disbursement Funding Debit"),
    ("450", Some(Debit), Summary, "Total ACH Debits"),
    ("451", Some(Debit), Detail, "ACH Debit Received"),
    ("452", Some(Debit), Detail, "Item in ACH Disbursement or Debit"),
    ("455", Some(Debit), Detail, "Preauthorized ACH Debit"),
    ("462", Some(Debit), Detail, "Account Holder Initiated ACH Debit"),
    ("463", Some(Debit), Summary, "Corporate Trade Payment Debits"),
    ("464", Some(Debit), Detail, "Corporate Trade Payment Debit"),
    ("465", Some(Debit), Summary, "Corporate Trade Payment Settlement"),
    ("466", Some(Debit), Detail, "ACH Settlement"),
    ("467", Some(Debit), Summary, "ACH Settlement Debits"),
    ("468", Some(Debit), Detail, "ACH Return Item or Adjustment Settlement"),
    ("469", Some(Debit), Detail, "Miscellaneous ACH Debit"),
    ("470", Some(Debit), Summary, "Total Check Paid"),
    ("471", Some(Debit), Summary, "Total Check Paid – Cumulative MTD"),
    ("472", Some(Debit), Detail, "Cumulative** Checks Paid"),
    ("474", Some(Debit), Detail, "Certified Check Debit"),
    ("475", Some(Debit), Detail, "Check Paid"),
    ("476", Some(Debit), Detail, "Federal Reserve Bank Letter Debit"),
    ("477", Some(Debit), Detail, "Bank Originated Debit"),
    ("478", Some(Debit), Summary, "List Post Debits"),
    ("479", Some(Debit), Detail, "List Post Debit"),
    ("480", Some(Debit), Summary, "Total Loan Payments"),
    ("481", Some(Debit), Detail, "Individual Loan Payment"),
    ("482", Some(Debit), Summary, "Total Bank-Originated Debits"),
    ("484", Some(Debit), Detail, "Draft"),
    ("485", Some(Debit), Detail, "DTC Debit"),
    ("486", Some(Debit), Summary, "Total Cash Letter Debits"),
    ("487", Some(Debit), Detail, "Cash Letter Debit"),
    ("489", Some(Debit), Detail, "Cash Letter Adjustment"),
    ("490", Some(Debit), Summary, "Total Outgoing Money Transfers"),
    ("491", Some(Debit), Detail, "Individual Outgoing Internal Money Transfer"),
    ("493", Some(Debit), Detail, "Customer Terminal Initiated Money Transfer"),
    ("495", Some(Debit), Detail, "Outgoing Money Transfer"),
    ("496", Some(Debit), Detail, "Money Transfer Adjustment"),
    ("498", Some(Debit), Detail, "Compensation"),
    ("500", Some(Debit), Summary, "Total Automatic Transfer Debits"),
    ("501", Some(Debit), Detail, "Individual Automatic Transfer Debit"),
    ("502", Some(Debit), Detail, "Bond Operations Debit"),
    ("505", Some(Debit), Summary, "Total Book Transfer Debits"),
    ("506", Some(Debit), Detail, "Book Transfer Debit"),
    ("507", Some(Debit), Summary, "Total International Money Transfer Debits"),
    ("508", Some(Debit), Detail, "Individual International Money Transfer Debits"),
    ("510", Some(Debit), Summary, "Total International Debits"),
    ("512", Some(Debit), Detail, "Letter of Credit Debit"),
    ("513", Some(Debit), Detail, "Letter of Credit"),
    ("514", Some(Debit), Detail, "Foreign Exchange Debit"),
    ("515", Some(Debit), Summary, "Total Letters of Credit"),
    ("516", Some(Debit), Detail, "Foreign Remittance Debit"),
    ("518", Some(Debit), Detail, "Foreign Collection Debit"),
    ("522", Some(Debit), Detail, "Foreign Checks Paid"),
    ("524", Some(Debit), Detail, "Commission"),
    ("526", Some(Debit), Detail, "International Money Market Trading"),
    ("527", Some(Debit), Detail, "Standing Order"),
    ("529", Some(Debit), Detail, "Miscellaneous International Debit"),
    ("530", Some(Debit), Summary, "Total Security Debits"),
    ("531", Some(Debit), Detail, "Securities Purchased"),
    ("532", Some(Debit), Summary, "Total Amount of Securities Purchased"),
    ("533", Some(Debit), Detail, "Security Collection Debit"),
    ("534", Some(Debit), Summary, "Total Miscellaneous Securities DB – FF"),
    ("535", Some(Debit), Detail, "Purchase of Equity Securities"),
    ("536", Some(Debit), Summary, "Total Miscellaneous Securities Debit – CHF"),
    ("537", Some(Debit), Summary, "Total Collection Debit"),
    ("538", Some(Debit), Detail, "Matured Repurchase Order"),
    ("539", Some(Debit), Summary, "Total Bankers’ Acceptances Debit"),
    ("540", Some(Debit), Detail, "Coupon Collection Debit"),
    ("541", Some(Debit), Detail, "Bankers’ Acceptances"),
    ("542", Some(Debit), Detail, "Purchase of Debt Securities"),
    ("543", Some(Debit), Detail, "Domestic Collection"),
    ("544", Some(Debit), Detail, "Interest/Matured Principal Payment"),
    ("546", Some(Debit), Detail, "Commercial paper"),
    ("547", Some(Debit), Detail, "Capital Change"),
    ("548", Some(Debit), Detail, "Savings Bonds Sales Adjustment"),
    ("549", Some(Debit), Detail, "Miscellaneous Security Debit"),
    ("550", Some(Debit), Summary, "Total Deposited Items Returned"),
    ("551", Some(Debit), Summary, "Total Credit Reversals"),
    ("552", Some(Debit), Detail, "Credit Reversal"),
    ("554", Some(Debit), Detail, "Posting Error Correction Debit"),
    ("555", Some(Debit), Detail, "Deposited Item Returned"),
    ("556", Some(Debit), Summary, "Total ACH Return Items"),
    ("557", Some(Debit), Detail, "Individual ACH Return Item"),
    ("558", Some(Debit), Detail, "ACH Reversal Debit"),
    ("560", Some(Debit), Summary, "Total Rejected Debits"),
    ("561", Some(Debit), Detail, "Individual Rejected Debit"),
    ("563", Some(Debit), Detail, "Overdraft"),
    ("564", Some(Debit), Detail, "Overdraft Fee"),
    ("566", Some(Debit), Detail, "Return Item"),
    ("567", Some(Debit), Detail, "Return Item Fee"),
    ("568", Some(Debit), Detail, "Return Item Adjustment"),
    ("570", Some(Debit), Summary, "Total ZBA Debits"),
    ("574", Some(Debit), Detail, "Cumulative ZBA Debits"),
    ("575", Some(Debit), Detail, "ZBA Debit"),
    ("577", Some(Debit), Detail, "ZBA Debit Transfer"),
    ("578", Some(Debit), Detail, "ZBA Debit Adjustment"),
    ("580", Some(Debit), Summary, "Total Controlled Disbursing Debits"),
    ("581", Some(Debit), Detail, "Individual Controlled Disbursing Debit"),
    ("583", Some(Debit), Summary, "Total Disbursing Checks Paid – Early Amount"),
    ("584", Some(Debit), Summary, "Total Disbursing Checks Paid – Later Amount"),
    ("585", Some(Debit), Summary, "Disbursing Funding Requirement"),
    ("586", Some(Debit), Summary, "FRB Presentment Estimate (Fed Estimate)"),
    ("587", Some(Debit), Summary, "Late Debits (After Notification)"),
    ("588", Some(Debit), Summary, "Total Disbursing Checks Paid-Last Amount"),
    ("590", Some(Debit), Summary, "Total DTC Debits"),
    ("594", Some(Debit), Summary, "Total ATM Debits"),
    ("595", Some(Debit), Detail, "ATM Debit"),
    ("596", Some(Debit), Summary, "Total APR Debits"),
    ("597", Some(Debit), Detail, "ARP Debit"),
    ("601", Some(Debit), Summary, "Estimated Total Disbursement"),
    ("602", Some(Debit), Summary, "Adjusted Total Disbursement"),
    ("610", Some(Debit), Summary, "Total Funds Required"),
    ("611", Some(Debit), Summary, "Total Wire Transfers Out- CHF"),
    ("612", Some(Debit), Summary, "Total Wire Transfers Out – FF"),
    ("613", Some(Debit), Summary, "Total International Debit – CHF"),
    ("614", Some(Debit), Summary, "Total International Debit – FF"),
    ("615", Some(Debit), Summary, "Total Federal Reserve Bank – Commercial Bank Debit"),
    ("616", Some(Debit), Detail, "Federal Reserve Bank – Commercial Bank Debit"),
    ("617", Some(Debit), Summary, "Total Securities Purchased – CHF"),
    ("618", Some(Debit), Summary, "Total Securities Purchased – FF"),
    ("621", Some(Debit), Summary, "Total Broker Debits – CHF"),
    ("622", Some(Debit), Detail, "Broker Debit"),
    ("623", Some(Debit), Summary, "Total Broker Debits – FF"),
    ("625", Some(Debit), Summary, "Total Broker Debits"),
    ("626", Some(Debit), Summary, "Total Fed Funds Purchased"),
    ("627", Some(Debit), Detail, "Fed Funds Purchased"),
    ("628", Some(Debit), Summary, "Total Cash Center Debits"),
    ("629", Some(Debit), Detail, "Cash Center Debit"),
    ("630", Some(Debit), Summary, "Total Debit Adjustments"),
    ("631", Some(Debit), Detail, "Debit Adjustment"),
    ("632", Some(Debit), Summary, "Total Trust Debits"),
    ("633", Some(Debit), Detail, "Trust Debit"),
    ("634", Some(Debit), Detail, "YTD Adjustment Debit"),
    ("640", Some(Debit), Summary, "Total Escrow Debits"),
    ("641", Some(Debit), Detail, "Individual Escrow Debit"),
    ("644", Some(Debit), Detail, "Individual Back Value Debit"),
    ("646", Some(Debit), Summary, "Transfer Calculation Debit"),
    ("650", Some(Debit), Summary, "Investments Purchased"),
    ("651", Some(Debit), Detail, "Individual Investment purchased"),
    ("654", Some(Debit), Detail, "Interest Debit"),
    ("655", Some(Debit), Summary, "Total Investment Interest Debits"),
    ("656", Some(Debit), Detail, "Sweep Principal Buy"),
    ("657", Some(Debit), Detail, "Futures Debit"),
    ("658", Some(Debit), Detail, "Principal Payments Debit"),
    ("659", Some(Debit), Detail, "Interest Adjustment Debit"),
    ("661", Some(Debit), Detail, "Account Analysis Fee"),
    ("662", Some(Debit), Detail, "Correspondent Collection Debit"),
    ("663", Some(Debit), Detail, "Correspondent Collection Adjustment"),
    ("664", Some(Debit), Detail, "Loan Participation"),
    ("665", Some(Debit), Summary, "Intercept Debits"),
    ("666", Some(Debit), Detail, "Currency and Coin Shipped"),
    ("667", Some(Debit), Detail, "Food Stamp Letter"),
    ("668", Some(Debit), Detail, "Food Stamp Adjustment"),
    ("669", Some(Debit), Detail, "Clearing Settlement Debit"),
    ("670", Some(Debit), Summary, "Total Back Value Debits"),
    ("672", Some(Debit), Detail, "Back Value Adjustment"),
    ("673", Some(Debit), Detail, "Customer Payroll"),
    ("674", Some(Debit), Detail, "FRB Statement Recap"),
    ("676", Some(Debit), Detail, "Savings Bond Letter or Adjustment"),
    ("677", Some(Debit), Detail, "Treasury Tax and Loan Debit"),
    ("678", Some(Debit), Detail, "Transfer of Treasury Debit"),
    ("679", Some(Debit), Detail, "FRB Government Checks Cash Letter Debit"),
    ("681", Some(Debit), Detail, "FRB Government Check Adjustment"),
    ("682", Some(Debit), Detail, "FRB Postal Money Order Debit"),
    ("683", Some(Debit), Detail, "FRB Postal Money Order Adjustment"),
    ("684", Some(Debit), Detail, "FRB Cash Letter Auto Charge Debit"),
    ("685", Some(Debit), Summary, "Total Universal Debits"),
    ("686", Some(Debit), Detail, "FRB Cash Letter Auto Charge Adjustment"),
    ("687", Some(Debit), Detail, "FRB Fine-Sort Cash Letter Debit"),
    ("688", Some(Debit), Detail, "FRB Fine-Sort Adjustment"),
    ("689", Some(Debit), Summary, "FRB Freight Payment Debits"),
    ("690", Some(Debit), Summary, "Total Miscellaneous Debits"),
    ("691", Some(Debit), Detail, "Universal Debit"),
    ("692", Some(Debit), Detail, "Freight Payment Debit"),
    ("693", Some(Debit), Detail, "Itemized Debit Over $10,000"),
    ("694", Some(Debit), Detail, "Deposit Reversal"),
    ("695", Some(Debit), Detail, "Deposit Correction Debit"),
    ("696", Some(Debit), Detail, "Regular Collection Debit"),
    ("697", Some(Debit), Detail, "Cumulative** Debits"),
    ("698", Some(Debit), Detail, "Miscellaneous Fees"),
    ("699", Some(Debit), Detail, "Miscellaneous Debit"),
    ("701", None, Status, "Principal Loan Balance"),
    ("703", None, Status, "Available Commitment Amount"),
    ("705", None, Status, "Payment Amount Due"),
    ("707", None, Status, "Principal Amount Past Due"),
    ("709", None, Status, "Interest Amount Past Due"),
    ("720", Some(Credit), Summary, "Total Loan Payment"),
    ("721", Some(Credit), Detail, "Amount Applied to Interest"),
    ("722", Some(Credit), Detail, "Amount Applied to Principal"),
    ("723", Some(Credit), Detail, "Amount Applied to Escrow"),
    ("724", Some(Credit), Detail, "Amount Applied to Late Charges"),
    ("725", Some(Credit), Detail, "Amount Applied to Buydown"),
    ("726", Some(Credit), Detail, "Amount Applied to Misc. Fees"),
    ("727", Some(Credit), Detail, "Amount Applied to Deferred Interest Detail"),
    ("728", Some(Credit), Detail, "Amount Applied to Service Charge"),
    ("760", Some(Debit), Summary, "Loan Disbursement"),
    ("890", None, Detail, "Contains Non-monetary Information"),
];
