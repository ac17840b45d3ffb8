//! Static catalog of known case-type codes
//!
//! Built once, never mutated, safe to share across sessions without
//! locking. Used by callers for input validation and selection lists.

/// Case-type codes accepted by the court's search form
pub const CASE_TYPES: &[&str] = &[
    "ADMIN.REPORT",
    "ARB.A.",
    "ARB. A. (COMM.)",
    "ARB.P.",
    "BAIL APPLN.",
    "CA",
    "CA (COMM.IPD-CR)",
    "C.A.(COMM.IPD-GI)",
    "C.A.(COMM.IPD-PAT)",
    "C.A.(COMM.IPD-PV)",
    "C.A.(COMM.IPD-TM)",
    "CAVEAT(CO.)",
    "CC(ARB.)",
    "CCP(CO.)",
    "CCP(REF)",
    "CEAC",
    "CEAR",
    "CHAT.A.C.",
    "CHAT.A.REF",
    "CMI",
    "CM(M)",
    "CM(M)-IPD",
    "C.O.",
    "CO.APP.",
    "CO.APPL.(C)",
    "CO.APPL.(M)",
    "CO.A(SB)",
    "C.O.(COMM.IPD-CR)",
    "C.O.(COMM.IPD-GI)",
    "C.O.(COMM.IPD-PAT)",
    "C.O. (COMM.IPD-TM)",
    "CO.EX.",
    "CONT.APP.(C)",
    "CONT.CAS(C)",
    "CONT.CAS.(CRL)",
    "CO.PET.",
    "C.REF.(O)",
    "CRL.A.",
    "CRL.L.P.",
    "CRL.M.C.",
    "CRL.M.(CO.)",
    "CRL.M.I.",
    "CRL.O.",
    "CRL.O.(CO.)",
    "CRL.REF.",
    "CRL.REV.P.",
    "CRL.REV.P.(MAT.)",
    "CRL.REV.P.(NDPS)",
    "CRL.REV.P.(NI)",
    "C.R.P.",
    "CRP-IPD",
    "C.RULE",
    "CS(COMM)",
    "CS(OS)",
    "CS(OS) GP",
    "CUSAA",
    "CUS.A.C.",
    "CUS.A.R.",
    "CUSTOM A.",
    "DEATH SENTENCE REF.",
    "W.P.(C)",
    "W.P.(C)-IPD",
    "W.P.(CRL)",
];

/// Whether `code` is a known case-type code
pub fn is_known_case_type(code: &str) -> bool {
    CASE_TYPES.contains(&code)
}

/// Filing years offered for selection, newest first (2025 down to 1951)
pub fn search_years() -> Vec<u16> {
    (1951..=2025).rev().collect()
}
