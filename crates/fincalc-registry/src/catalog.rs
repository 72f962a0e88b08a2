//! The compiled-in formula catalogue.
//!
//! Each formula lists its variables in display order and one branch per
//! variable in the same order. Every branch requires all other variables of
//! its formula, which keeps intermediate quantities (operating costs,
//! contribution per unit, financing costs) from being derived out of a
//! partial set of inputs.

use fincalc_core::transfer::{
    BUYER_EXTERNAL_PRICE, MARKET_PRICE, SCENARIO, SCENARIO_OPTIONS, SUPPLIER_VARIABLE_COST,
};
use fincalc_core::{Branch, Capability, Category, FormulaDefinition, VariableSpec};

// ---------------------------------------------------------------------------
// Shared variables
// ---------------------------------------------------------------------------

const REVENUE: VariableSpec = VariableSpec::number("revenue", "Revenue ($)");
const CONTRIBUTION: VariableSpec = VariableSpec::number("contribution", "Contribution ($)");
const VARIABLE_COSTS: VariableSpec = VariableSpec::number("variableCosts", "Variable Costs ($)");
const FIXED_COSTS: VariableSpec = VariableSpec::number("fixedCosts", "Fixed Costs ($)");
const OPERATING_PROFIT: VariableSpec =
    VariableSpec::number("operatingProfit", "Operating Profit ($)");
const INVESTED_CAPITAL: VariableSpec =
    VariableSpec::number("investedCapital", "Invested Capital ($)");
const FINANCING_COSTS: VariableSpec = VariableSpec::number("financingCosts", "Financing Costs ($)");
const ECONOMIC_PROFIT: VariableSpec = VariableSpec::number("economicProfit", "Economic Profit ($)");
const COIC: VariableSpec = VariableSpec::number("coic", "Cost of Invested Capital (%)").percent();
const ROIC: VariableSpec =
    VariableSpec::number("roic", "Return on Invested Capital (%)").percent();
const OPERATING_LEVERAGE: VariableSpec =
    VariableSpec::number("operatingLeverage", "Operating Leverage (Factor)");

// ---------------------------------------------------------------------------
// I. Basic Profitability & Cost Structure
// ---------------------------------------------------------------------------

const REVENUE_VARS: &[VariableSpec] = &[
    REVENUE.computed(),
    VariableSpec::number("salesPrice", "Sales Price per unit ($)"),
    VariableSpec::number("salesVolume", "Sales Volume (units)"),
];

const REVENUE_BRANCHES: &[Branch] = &[
    Branch {
        target: "revenue",
        requires: &["salesPrice", "salesVolume"],
        compute: |k| k.get("salesPrice") * k.get("salesVolume"),
    },
    Branch {
        target: "salesPrice",
        requires: &["revenue", "salesVolume"],
        compute: |k| k.get("revenue") / k.get("salesVolume"),
    },
    Branch {
        target: "salesVolume",
        requires: &["revenue", "salesPrice"],
        compute: |k| k.get("revenue") / k.get("salesPrice"),
    },
];

const CONTRIBUTION_FROM_REVENUE_VARS: &[VariableSpec] =
    &[CONTRIBUTION.computed(), REVENUE, VARIABLE_COSTS];

const CONTRIBUTION_FROM_REVENUE_BRANCHES: &[Branch] = &[
    Branch {
        target: "contribution",
        requires: &["revenue", "variableCosts"],
        compute: |k| k.get("revenue") - k.get("variableCosts"),
    },
    Branch {
        target: "revenue",
        requires: &["contribution", "variableCosts"],
        compute: |k| k.get("contribution") + k.get("variableCosts"),
    },
    Branch {
        target: "variableCosts",
        requires: &["contribution", "revenue"],
        compute: |k| k.get("revenue") - k.get("contribution"),
    },
];

const CONTRIBUTION_FROM_PROFIT_VARS: &[VariableSpec] =
    &[CONTRIBUTION.computed(), OPERATING_PROFIT, FIXED_COSTS];

const CONTRIBUTION_FROM_PROFIT_BRANCHES: &[Branch] = &[
    Branch {
        target: "contribution",
        requires: &["operatingProfit", "fixedCosts"],
        compute: |k| k.get("operatingProfit") + k.get("fixedCosts"),
    },
    Branch {
        target: "operatingProfit",
        requires: &["contribution", "fixedCosts"],
        compute: |k| k.get("contribution") - k.get("fixedCosts"),
    },
    Branch {
        target: "fixedCosts",
        requires: &["contribution", "operatingProfit"],
        compute: |k| k.get("contribution") - k.get("operatingProfit"),
    },
];

// Operating costs = variable + fixed; only meaningful once both are known.
const PROFIT_FROM_REVENUE_VARS: &[VariableSpec] = &[
    OPERATING_PROFIT.computed(),
    REVENUE,
    VARIABLE_COSTS,
    FIXED_COSTS,
];

const PROFIT_FROM_REVENUE_BRANCHES: &[Branch] = &[
    Branch {
        target: "operatingProfit",
        requires: &["revenue", "variableCosts", "fixedCosts"],
        compute: |k| k.get("revenue") - (k.get("variableCosts") + k.get("fixedCosts")),
    },
    Branch {
        target: "revenue",
        requires: &["operatingProfit", "variableCosts", "fixedCosts"],
        compute: |k| k.get("operatingProfit") + (k.get("variableCosts") + k.get("fixedCosts")),
    },
    Branch {
        target: "variableCosts",
        requires: &["operatingProfit", "revenue", "fixedCosts"],
        compute: |k| k.get("revenue") - k.get("operatingProfit") - k.get("fixedCosts"),
    },
    Branch {
        target: "fixedCosts",
        requires: &["operatingProfit", "revenue", "variableCosts"],
        compute: |k| k.get("revenue") - k.get("operatingProfit") - k.get("variableCosts"),
    },
];

const PROFIT_FROM_CONTRIBUTION_VARS: &[VariableSpec] =
    &[OPERATING_PROFIT.computed(), CONTRIBUTION, FIXED_COSTS];

const PROFIT_FROM_CONTRIBUTION_BRANCHES: &[Branch] = &[
    Branch {
        target: "operatingProfit",
        requires: &["contribution", "fixedCosts"],
        compute: |k| k.get("contribution") - k.get("fixedCosts"),
    },
    Branch {
        target: "contribution",
        requires: &["operatingProfit", "fixedCosts"],
        compute: |k| k.get("operatingProfit") + k.get("fixedCosts"),
    },
    Branch {
        target: "fixedCosts",
        requires: &["operatingProfit", "contribution"],
        compute: |k| k.get("contribution") - k.get("operatingProfit"),
    },
];

const VARIABLE_COSTS_VARS: &[VariableSpec] = &[VARIABLE_COSTS.computed(), REVENUE, CONTRIBUTION];

const VARIABLE_COSTS_BRANCHES: &[Branch] = &[
    Branch {
        target: "variableCosts",
        requires: &["revenue", "contribution"],
        compute: |k| k.get("revenue") - k.get("contribution"),
    },
    Branch {
        target: "revenue",
        requires: &["variableCosts", "contribution"],
        compute: |k| k.get("variableCosts") + k.get("contribution"),
    },
    Branch {
        target: "contribution",
        requires: &["variableCosts", "revenue"],
        compute: |k| k.get("revenue") - k.get("variableCosts"),
    },
];

const FIXED_COSTS_VARS: &[VariableSpec] =
    &[FIXED_COSTS.computed(), CONTRIBUTION, OPERATING_PROFIT];

const FIXED_COSTS_BRANCHES: &[Branch] = &[
    Branch {
        target: "fixedCosts",
        requires: &["contribution", "operatingProfit"],
        compute: |k| k.get("contribution") - k.get("operatingProfit"),
    },
    Branch {
        target: "contribution",
        requires: &["fixedCosts", "operatingProfit"],
        compute: |k| k.get("fixedCosts") + k.get("operatingProfit"),
    },
    Branch {
        target: "operatingProfit",
        requires: &["fixedCosts", "contribution"],
        compute: |k| k.get("contribution") - k.get("fixedCosts"),
    },
];

// ---------------------------------------------------------------------------
// II. Profitability Ratios & Advanced Financial Metrics
// ---------------------------------------------------------------------------

const MARGIN_VARS: &[VariableSpec] = &[
    VariableSpec::number("operatingProfitMargin", "Operating Profit Margin (%)")
        .computed()
        .percent(),
    OPERATING_PROFIT,
    REVENUE,
];

const MARGIN_BRANCHES: &[Branch] = &[
    Branch {
        target: "operatingProfitMargin",
        requires: &["operatingProfit", "revenue"],
        compute: |k| k.get("operatingProfit") / k.get("revenue") * 100.0,
    },
    Branch {
        target: "operatingProfit",
        requires: &["operatingProfitMargin", "revenue"],
        compute: |k| k.ratio("operatingProfitMargin") * k.get("revenue"),
    },
    Branch {
        target: "revenue",
        requires: &["operatingProfitMargin", "operatingProfit"],
        compute: |k| k.get("operatingProfit") / k.ratio("operatingProfitMargin"),
    },
];

const ROIC_VARS: &[VariableSpec] = &[ROIC.computed(), OPERATING_PROFIT, INVESTED_CAPITAL];

const ROIC_BRANCHES: &[Branch] = &[
    Branch {
        target: "roic",
        requires: &["operatingProfit", "investedCapital"],
        compute: |k| k.get("operatingProfit") / k.get("investedCapital") * 100.0,
    },
    Branch {
        target: "operatingProfit",
        requires: &["roic", "investedCapital"],
        compute: |k| k.ratio("roic") * k.get("investedCapital"),
    },
    Branch {
        target: "investedCapital",
        requires: &["roic", "operatingProfit"],
        compute: |k| k.get("operatingProfit") / k.ratio("roic"),
    },
];

const FINANCING_COSTS_VARS: &[VariableSpec] = &[FINANCING_COSTS.computed(), INVESTED_CAPITAL, COIC];

const FINANCING_COSTS_BRANCHES: &[Branch] = &[
    Branch {
        target: "financingCosts",
        requires: &["investedCapital", "coic"],
        compute: |k| k.get("investedCapital") * k.ratio("coic"),
    },
    Branch {
        target: "investedCapital",
        requires: &["financingCosts", "coic"],
        compute: |k| k.get("financingCosts") / k.ratio("coic"),
    },
    Branch {
        target: "coic",
        requires: &["financingCosts", "investedCapital"],
        compute: |k| k.get("financingCosts") / k.get("investedCapital") * 100.0,
    },
];

const EP_FROM_FINANCING_VARS: &[VariableSpec] =
    &[ECONOMIC_PROFIT.computed(), OPERATING_PROFIT, FINANCING_COSTS];

const EP_FROM_FINANCING_BRANCHES: &[Branch] = &[
    Branch {
        target: "economicProfit",
        requires: &["operatingProfit", "financingCosts"],
        compute: |k| k.get("operatingProfit") - k.get("financingCosts"),
    },
    Branch {
        target: "operatingProfit",
        requires: &["economicProfit", "financingCosts"],
        compute: |k| k.get("economicProfit") + k.get("financingCosts"),
    },
    Branch {
        target: "financingCosts",
        requires: &["economicProfit", "operatingProfit"],
        compute: |k| k.get("operatingProfit") - k.get("economicProfit"),
    },
];

// Financing costs = invested capital x COIC, needed by the first two branches.
const EP_FROM_CAPITAL_VARS: &[VariableSpec] = &[
    ECONOMIC_PROFIT.computed(),
    OPERATING_PROFIT,
    INVESTED_CAPITAL,
    COIC,
];

const EP_FROM_CAPITAL_BRANCHES: &[Branch] = &[
    Branch {
        target: "economicProfit",
        requires: &["operatingProfit", "investedCapital", "coic"],
        compute: |k| k.get("operatingProfit") - k.get("investedCapital") * k.ratio("coic"),
    },
    Branch {
        target: "operatingProfit",
        requires: &["economicProfit", "investedCapital", "coic"],
        compute: |k| k.get("economicProfit") + k.get("investedCapital") * k.ratio("coic"),
    },
    Branch {
        target: "investedCapital",
        requires: &["economicProfit", "operatingProfit", "coic"],
        compute: |k| (k.get("operatingProfit") - k.get("economicProfit")) / k.ratio("coic"),
    },
    Branch {
        target: "coic",
        requires: &["economicProfit", "operatingProfit", "investedCapital"],
        compute: |k| {
            (k.get("operatingProfit") - k.get("economicProfit")) / k.get("investedCapital") * 100.0
        },
    },
];

const EP_FROM_SPREAD_VARS: &[VariableSpec] =
    &[ECONOMIC_PROFIT.computed(), ROIC, COIC, INVESTED_CAPITAL];

const EP_FROM_SPREAD_BRANCHES: &[Branch] = &[
    Branch {
        target: "economicProfit",
        requires: &["roic", "coic", "investedCapital"],
        compute: |k| (k.get("roic") - k.get("coic")) / 100.0 * k.get("investedCapital"),
    },
    Branch {
        target: "roic",
        requires: &["economicProfit", "coic", "investedCapital"],
        compute: |k| k.get("economicProfit") / k.get("investedCapital") * 100.0 + k.get("coic"),
    },
    Branch {
        target: "coic",
        requires: &["economicProfit", "roic", "investedCapital"],
        compute: |k| k.get("roic") - k.get("economicProfit") / k.get("investedCapital") * 100.0,
    },
    Branch {
        target: "investedCapital",
        requires: &["economicProfit", "roic", "coic"],
        compute: |k| k.get("economicProfit") / ((k.get("roic") - k.get("coic")) / 100.0),
    },
];

// ---------------------------------------------------------------------------
// III. Sensitivity & Decision Analysis
// ---------------------------------------------------------------------------

const LEVERAGE_VARS: &[VariableSpec] =
    &[OPERATING_LEVERAGE.computed(), CONTRIBUTION, OPERATING_PROFIT];

const LEVERAGE_BRANCHES: &[Branch] = &[
    Branch {
        target: "operatingLeverage",
        requires: &["contribution", "operatingProfit"],
        compute: |k| k.get("contribution") / k.get("operatingProfit"),
    },
    Branch {
        target: "contribution",
        requires: &["operatingLeverage", "operatingProfit"],
        compute: |k| k.get("operatingLeverage") * k.get("operatingProfit"),
    },
    Branch {
        target: "operatingProfit",
        requires: &["operatingLeverage", "contribution"],
        compute: |k| k.get("contribution") / k.get("operatingLeverage"),
    },
];

const PROFIT_CHANGE_VARS: &[VariableSpec] = &[
    VariableSpec::number("operatingProfitChange", "Change in Operating Profit (%)")
        .computed()
        .percent(),
    VariableSpec::number("salesVolumeChange", "Change in Sales Volume (%)").percent(),
    OPERATING_LEVERAGE,
];

const PROFIT_CHANGE_BRANCHES: &[Branch] = &[
    Branch {
        target: "operatingProfitChange",
        requires: &["salesVolumeChange", "operatingLeverage"],
        compute: |k| k.get("salesVolumeChange") * k.get("operatingLeverage"),
    },
    Branch {
        target: "salesVolumeChange",
        requires: &["operatingProfitChange", "operatingLeverage"],
        compute: |k| k.get("operatingProfitChange") / k.get("operatingLeverage"),
    },
    Branch {
        target: "operatingLeverage",
        requires: &["operatingProfitChange", "salesVolumeChange"],
        compute: |k| k.get("operatingProfitChange") / k.get("salesVolumeChange"),
    },
];

// Contribution per unit = price - variable cost per unit.
const BREAK_EVEN_VARS: &[VariableSpec] = &[
    VariableSpec::number("breakEvenUnits", "Break-Even Units").computed(),
    FIXED_COSTS,
    VariableSpec::number("pricePerUnit", "Price per unit ($)"),
    VariableSpec::number("variableCostPerUnit", "Variable Cost per unit ($)"),
];

const BREAK_EVEN_BRANCHES: &[Branch] = &[
    Branch {
        target: "breakEvenUnits",
        requires: &["fixedCosts", "pricePerUnit", "variableCostPerUnit"],
        compute: |k| k.get("fixedCosts") / (k.get("pricePerUnit") - k.get("variableCostPerUnit")),
    },
    Branch {
        target: "fixedCosts",
        requires: &["breakEvenUnits", "pricePerUnit", "variableCostPerUnit"],
        compute: |k| {
            k.get("breakEvenUnits") * (k.get("pricePerUnit") - k.get("variableCostPerUnit"))
        },
    },
    Branch {
        target: "pricePerUnit",
        requires: &["breakEvenUnits", "fixedCosts", "variableCostPerUnit"],
        compute: |k| k.get("fixedCosts") / k.get("breakEvenUnits") + k.get("variableCostPerUnit"),
    },
    Branch {
        target: "variableCostPerUnit",
        requires: &["breakEvenUnits", "fixedCosts", "pricePerUnit"],
        compute: |k| k.get("pricePerUnit") - k.get("fixedCosts") / k.get("breakEvenUnits"),
    },
];

const VOLUME_INCREASE_VARS: &[VariableSpec] = &[
    VariableSpec::number("volumeIncreaseNeeded", "Volume Increase Needed (%)")
        .computed()
        .percent(),
    VariableSpec::number("oldContributionPerUnit", "Old Contribution per unit ($)"),
    VariableSpec::number("newContributionPerUnit", "New Contribution per unit ($)"),
];

const VOLUME_INCREASE_BRANCHES: &[Branch] = &[
    Branch {
        target: "volumeIncreaseNeeded",
        requires: &["oldContributionPerUnit", "newContributionPerUnit"],
        compute: |k| {
            let new = k.get("newContributionPerUnit");
            (k.get("oldContributionPerUnit") - new) / new * 100.0
        },
    },
    Branch {
        target: "oldContributionPerUnit",
        requires: &["volumeIncreaseNeeded", "newContributionPerUnit"],
        compute: |k| k.get("newContributionPerUnit") * (1.0 + k.ratio("volumeIncreaseNeeded")),
    },
    Branch {
        target: "newContributionPerUnit",
        requires: &["volumeIncreaseNeeded", "oldContributionPerUnit"],
        compute: |k| k.get("oldContributionPerUnit") / (1.0 + k.ratio("volumeIncreaseNeeded")),
    },
];

// ---------------------------------------------------------------------------
// IV. Cost Allocation & Asset Valuation
// ---------------------------------------------------------------------------

const FULL_COST_VARS: &[VariableSpec] = &[
    VariableSpec::number("fullCost", "Full Cost ($)").computed(),
    VariableSpec::number("directCosts", "Direct Costs ($)"),
    VariableSpec::number("indirectCosts", "Indirect Costs ($)"),
];

const FULL_COST_BRANCHES: &[Branch] = &[
    Branch {
        target: "fullCost",
        requires: &["directCosts", "indirectCosts"],
        compute: |k| k.get("directCosts") + k.get("indirectCosts"),
    },
    Branch {
        target: "directCosts",
        requires: &["fullCost", "indirectCosts"],
        compute: |k| k.get("fullCost") - k.get("indirectCosts"),
    },
    Branch {
        target: "indirectCosts",
        requires: &["fullCost", "directCosts"],
        compute: |k| k.get("fullCost") - k.get("directCosts"),
    },
];

const ALLOCATION_VARS: &[VariableSpec] = &[
    VariableSpec::number("allocatedIndirectCosts", "Allocated Indirect Costs ($)").computed(),
    VariableSpec::number("totalIndirectCosts", "Total Indirect Costs ($)"),
    VariableSpec::number("productDirectCosts", "Product's Direct Costs ($)"),
    VariableSpec::number("totalDirectCosts", "Total Direct Costs for all products ($)"),
];

const ALLOCATION_BRANCHES: &[Branch] = &[
    Branch {
        target: "allocatedIndirectCosts",
        requires: &["totalIndirectCosts", "productDirectCosts", "totalDirectCosts"],
        compute: |k| {
            k.get("totalIndirectCosts") * (k.get("productDirectCosts") / k.get("totalDirectCosts"))
        },
    },
    Branch {
        target: "totalIndirectCosts",
        requires: &["allocatedIndirectCosts", "productDirectCosts", "totalDirectCosts"],
        compute: |k| {
            k.get("allocatedIndirectCosts")
                / (k.get("productDirectCosts") / k.get("totalDirectCosts"))
        },
    },
    Branch {
        target: "productDirectCosts",
        requires: &["allocatedIndirectCosts", "totalIndirectCosts", "totalDirectCosts"],
        compute: |k| {
            k.get("allocatedIndirectCosts") * k.get("totalDirectCosts")
                / k.get("totalIndirectCosts")
        },
    },
    Branch {
        target: "totalDirectCosts",
        requires: &["allocatedIndirectCosts", "totalIndirectCosts", "productDirectCosts"],
        compute: |k| {
            k.get("totalIndirectCosts") * k.get("productDirectCosts")
                / k.get("allocatedIndirectCosts")
        },
    },
];

const DEPRECIATION_VARS: &[VariableSpec] = &[
    VariableSpec::number("depreciation", "Annual Depreciation ($)").computed(),
    VariableSpec::number("assetCost", "Asset Cost ($)"),
    VariableSpec::number("salvageValue", "Salvage Value ($)"),
    VariableSpec::number("usefulLife", "Useful Life (years)"),
];

const DEPRECIATION_BRANCHES: &[Branch] = &[
    Branch {
        target: "depreciation",
        requires: &["assetCost", "salvageValue", "usefulLife"],
        compute: |k| (k.get("assetCost") - k.get("salvageValue")) / k.get("usefulLife"),
    },
    Branch {
        target: "assetCost",
        requires: &["depreciation", "salvageValue", "usefulLife"],
        compute: |k| k.get("depreciation") * k.get("usefulLife") + k.get("salvageValue"),
    },
    Branch {
        target: "salvageValue",
        requires: &["depreciation", "assetCost", "usefulLife"],
        compute: |k| k.get("assetCost") - k.get("depreciation") * k.get("usefulLife"),
    },
    Branch {
        target: "usefulLife",
        requires: &["depreciation", "assetCost", "salvageValue"],
        compute: |k| (k.get("assetCost") - k.get("salvageValue")) / k.get("depreciation"),
    },
];

// Per-unit depreciation plus per-unit financing of the asset value.
const ASSET_COST_VARS: &[VariableSpec] = &[
    VariableSpec::number("assetCostPerProduct", "Asset Cost per Product ($)").computed(),
    VariableSpec::number("totalAnnualDepreciation", "Total Annual Depreciation ($)"),
    VariableSpec::number("assetValue", "Asset Value ($)"),
    COIC,
    VariableSpec::number("annualProductionVolume", "Annual Production Volume (units)"),
];

const ASSET_COST_BRANCHES: &[Branch] = &[
    Branch {
        target: "assetCostPerProduct",
        requires: &["totalAnnualDepreciation", "assetValue", "coic", "annualProductionVolume"],
        compute: |k| {
            let volume = k.get("annualProductionVolume");
            k.get("totalAnnualDepreciation") / volume + k.get("assetValue") * k.ratio("coic") / volume
        },
    },
    Branch {
        target: "totalAnnualDepreciation",
        requires: &["assetCostPerProduct", "assetValue", "coic", "annualProductionVolume"],
        compute: |k| {
            k.get("assetCostPerProduct") * k.get("annualProductionVolume")
                - k.get("assetValue") * k.ratio("coic")
        },
    },
    Branch {
        target: "assetValue",
        requires: &["assetCostPerProduct", "totalAnnualDepreciation", "coic", "annualProductionVolume"],
        compute: |k| {
            let financing = k.get("assetCostPerProduct") * k.get("annualProductionVolume")
                - k.get("totalAnnualDepreciation");
            financing / k.ratio("coic")
        },
    },
    Branch {
        target: "coic",
        requires: &["assetCostPerProduct", "totalAnnualDepreciation", "assetValue", "annualProductionVolume"],
        compute: |k| {
            let financing = k.get("assetCostPerProduct") * k.get("annualProductionVolume")
                - k.get("totalAnnualDepreciation");
            financing / k.get("assetValue") * 100.0
        },
    },
    Branch {
        target: "annualProductionVolume",
        requires: &["assetCostPerProduct", "totalAnnualDepreciation", "assetValue", "coic"],
        compute: |k| {
            let total = k.get("totalAnnualDepreciation") + k.get("assetValue") * k.ratio("coic");
            total / k.get("assetCostPerProduct")
        },
    },
];

// ---------------------------------------------------------------------------
// V. Internal Pricing
// ---------------------------------------------------------------------------

const TRANSFER_PRICE_VARS: &[VariableSpec] = &[
    VariableSpec::select(SCENARIO, "Capacity Scenario", SCENARIO_OPTIONS),
    VariableSpec::number(MARKET_PRICE, "Market Price (supplier's external) ($)"),
    VariableSpec::number(SUPPLIER_VARIABLE_COST, "Supplier's Variable Cost ($)"),
    VariableSpec::number(BUYER_EXTERNAL_PRICE, "Buyer's External Purchase Price ($)"),
];

// ---------------------------------------------------------------------------
// VI. Specific Project/Decision Evaluation
// ---------------------------------------------------------------------------

const INCREMENTAL_EP_VARS: &[VariableSpec] = &[
    VariableSpec::number("incrementalEP", "Incremental Economic Profit ($)").computed(),
    VariableSpec::number("incrementalOperatingProfit", "Incremental Operating Profit ($)"),
    VariableSpec::number("incrementalInvestedCapital", "Incremental Invested Capital ($)"),
    COIC,
];

const INCREMENTAL_EP_BRANCHES: &[Branch] = &[
    Branch {
        target: "incrementalEP",
        requires: &["incrementalOperatingProfit", "incrementalInvestedCapital", "coic"],
        compute: |k| {
            k.get("incrementalOperatingProfit")
                - k.get("incrementalInvestedCapital") * k.ratio("coic")
        },
    },
    Branch {
        target: "incrementalOperatingProfit",
        requires: &["incrementalEP", "incrementalInvestedCapital", "coic"],
        compute: |k| k.get("incrementalEP") + k.get("incrementalInvestedCapital") * k.ratio("coic"),
    },
    Branch {
        target: "incrementalInvestedCapital",
        requires: &["incrementalEP", "incrementalOperatingProfit", "coic"],
        compute: |k| {
            (k.get("incrementalOperatingProfit") - k.get("incrementalEP")) / k.ratio("coic")
        },
    },
    Branch {
        target: "coic",
        requires: &["incrementalEP", "incrementalOperatingProfit", "incrementalInvestedCapital"],
        compute: |k| {
            (k.get("incrementalOperatingProfit") - k.get("incrementalEP"))
                / k.get("incrementalInvestedCapital")
                * 100.0
        },
    },
];

const DELAYED_PAYMENT_VARS: &[VariableSpec] = &[
    VariableSpec::number("financingCostDelayed", "Financing Cost of Delayed Payment ($)")
        .computed(),
    VariableSpec::number("receivableAmount", "Amount of Receivable ($)"),
    COIC,
    VariableSpec::number("delayPeriod", "Delay Period (months)"),
];

const DELAYED_PAYMENT_BRANCHES: &[Branch] = &[
    Branch {
        target: "financingCostDelayed",
        requires: &["receivableAmount", "coic", "delayPeriod"],
        compute: |k| k.get("receivableAmount") * k.ratio("coic") * (k.get("delayPeriod") / 12.0),
    },
    Branch {
        target: "receivableAmount",
        requires: &["financingCostDelayed", "coic", "delayPeriod"],
        compute: |k| {
            k.get("financingCostDelayed") / (k.ratio("coic") * (k.get("delayPeriod") / 12.0))
        },
    },
    Branch {
        target: "coic",
        requires: &["financingCostDelayed", "receivableAmount", "delayPeriod"],
        compute: |k| {
            k.get("financingCostDelayed")
                / (k.get("receivableAmount") * (k.get("delayPeriod") / 12.0))
                * 100.0
        },
    },
    Branch {
        target: "delayPeriod",
        requires: &["financingCostDelayed", "receivableAmount", "coic"],
        compute: |k| {
            k.get("financingCostDelayed") / (k.get("receivableAmount") * k.ratio("coic")) * 12.0
        },
    },
];

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

/// Every formula, grouped by category and ordered by id.
pub static FORMULAS: &[FormulaDefinition] = &[
    FormulaDefinition {
        id: 1,
        name: "Revenue",
        description: "Revenue = Sales Price per unit × Sales Volume (units)",
        category: Category::BasicProfitability,
        variables: REVENUE_VARS,
        capability: Capability::NumericSolver(REVENUE_BRANCHES),
    },
    FormulaDefinition {
        id: 2,
        name: "Contribution from Revenue and Variable Costs",
        description: "Contribution = Revenue – Variable Costs",
        category: Category::BasicProfitability,
        variables: CONTRIBUTION_FROM_REVENUE_VARS,
        capability: Capability::NumericSolver(CONTRIBUTION_FROM_REVENUE_BRANCHES),
    },
    FormulaDefinition {
        id: 3,
        name: "Contribution from Operating Profit and Fixed Costs",
        description: "Contribution = Operating Profit + Fixed Costs",
        category: Category::BasicProfitability,
        variables: CONTRIBUTION_FROM_PROFIT_VARS,
        capability: Capability::NumericSolver(CONTRIBUTION_FROM_PROFIT_BRANCHES),
    },
    FormulaDefinition {
        id: 4,
        name: "Operating Profit from Revenue and Costs",
        description: "Operating Profit = Revenue – Operating Costs (where OpCosts = VarCosts + FixedCosts)",
        category: Category::BasicProfitability,
        variables: PROFIT_FROM_REVENUE_VARS,
        capability: Capability::NumericSolver(PROFIT_FROM_REVENUE_BRANCHES),
    },
    FormulaDefinition {
        id: 5,
        name: "Operating Profit from Contribution and Fixed Costs",
        description: "Operating Profit = Contribution – Fixed Costs",
        category: Category::BasicProfitability,
        variables: PROFIT_FROM_CONTRIBUTION_VARS,
        capability: Capability::NumericSolver(PROFIT_FROM_CONTRIBUTION_BRANCHES),
    },
    FormulaDefinition {
        id: 6,
        name: "Variable Costs",
        description: "Variable Costs = Revenue – Contribution",
        category: Category::BasicProfitability,
        variables: VARIABLE_COSTS_VARS,
        capability: Capability::NumericSolver(VARIABLE_COSTS_BRANCHES),
    },
    FormulaDefinition {
        id: 7,
        name: "Fixed Costs",
        description: "Fixed Costs = Contribution – Operating Profit",
        category: Category::BasicProfitability,
        variables: FIXED_COSTS_VARS,
        capability: Capability::NumericSolver(FIXED_COSTS_BRANCHES),
    },
    FormulaDefinition {
        id: 8,
        name: "Operating Profit Margin",
        description: "Operating Profit Margin (%) = Operating Profit / Revenue",
        category: Category::ProfitabilityRatios,
        variables: MARGIN_VARS,
        capability: Capability::NumericSolver(MARGIN_BRANCHES),
    },
    FormulaDefinition {
        id: 9,
        name: "Return on Invested Capital (ROIC)",
        description: "Return on Invested Capital (ROIC) (%) = Operating Profit / Invested Capital",
        category: Category::ProfitabilityRatios,
        variables: ROIC_VARS,
        capability: Capability::NumericSolver(ROIC_BRANCHES),
    },
    FormulaDefinition {
        id: 10,
        name: "Financing Costs",
        description: "Financing Costs = Invested Capital (IC) × Cost of Invested Capital (COIC %)",
        category: Category::ProfitabilityRatios,
        variables: FINANCING_COSTS_VARS,
        capability: Capability::NumericSolver(FINANCING_COSTS_BRANCHES),
    },
    FormulaDefinition {
        id: 11,
        name: "Economic Profit from Operating Profit and Financing Costs",
        description: "Economic Profit (EP) = Operating Profit – Financing Costs",
        category: Category::ProfitabilityRatios,
        variables: EP_FROM_FINANCING_VARS,
        capability: Capability::NumericSolver(EP_FROM_FINANCING_BRANCHES),
    },
    FormulaDefinition {
        id: 12,
        name: "Economic Profit from Operating Profit, Invested Capital, and COIC",
        description: "Economic Profit (EP) = Operating Profit – (Invested Capital × COIC)",
        category: Category::ProfitabilityRatios,
        variables: EP_FROM_CAPITAL_VARS,
        capability: Capability::NumericSolver(EP_FROM_CAPITAL_BRANCHES),
    },
    FormulaDefinition {
        id: 13,
        name: "Economic Profit from ROIC, COIC, and Invested Capital",
        description: "Economic Profit (EP) = (ROIC – COIC) × Invested Capital",
        category: Category::ProfitabilityRatios,
        variables: EP_FROM_SPREAD_VARS,
        capability: Capability::NumericSolver(EP_FROM_SPREAD_BRANCHES),
    },
    FormulaDefinition {
        id: 14,
        name: "Operating Leverage",
        description: "Operating Leverage (Factor) = Contribution / Operating Profit",
        category: Category::SensitivityAnalysis,
        variables: LEVERAGE_VARS,
        capability: Capability::NumericSolver(LEVERAGE_BRANCHES),
    },
    FormulaDefinition {
        id: 15,
        name: "Change in Operating Profit",
        description: "% Change in Operating Profit = % Change in Sales Volume × Operating Leverage",
        category: Category::SensitivityAnalysis,
        variables: PROFIT_CHANGE_VARS,
        capability: Capability::NumericSolver(PROFIT_CHANGE_BRANCHES),
    },
    FormulaDefinition {
        id: 16,
        name: "Break-Even Units",
        description: "Break-Even Units = Fixed Costs / Contribution per unit",
        category: Category::SensitivityAnalysis,
        variables: BREAK_EVEN_VARS,
        capability: Capability::NumericSolver(BREAK_EVEN_BRANCHES),
    },
    FormulaDefinition {
        id: 17,
        name: "Required Volume Increase",
        description: "% Volume Increase Needed = (Old Contribution per unit - New Contribution per unit) / New Contribution per unit",
        category: Category::SensitivityAnalysis,
        variables: VOLUME_INCREASE_VARS,
        capability: Capability::NumericSolver(VOLUME_INCREASE_BRANCHES),
    },
    FormulaDefinition {
        id: 18,
        name: "Full Cost",
        description: "Full Cost (Traceability) = Direct Costs + Indirect Costs",
        category: Category::CostAllocation,
        variables: FULL_COST_VARS,
        capability: Capability::NumericSolver(FULL_COST_BRANCHES),
    },
    FormulaDefinition {
        id: 19,
        name: "Allocated Indirect Costs",
        description: "Allocated Indirect Costs to Product = Total Indirect Costs × (Product's Direct Costs / Total Direct Costs for all products)",
        category: Category::CostAllocation,
        variables: ALLOCATION_VARS,
        capability: Capability::NumericSolver(ALLOCATION_BRANCHES),
    },
    FormulaDefinition {
        id: 20,
        name: "Straight-Line Depreciation",
        description: "Straight-Line Depreciation = (Asset Cost – Salvage Value) / Useful Life",
        category: Category::CostAllocation,
        variables: DEPRECIATION_VARS,
        capability: Capability::NumericSolver(DEPRECIATION_BRANCHES),
    },
    FormulaDefinition {
        id: 21,
        name: "Asset Cost per Product",
        description: "Asset Cost (Depreciation + Financing) per product = (Total Annual Depreciation / Annual Production Volume) + ((Asset Value × COIC %) / Annual Production Volume)",
        category: Category::CostAllocation,
        variables: ASSET_COST_VARS,
        capability: Capability::NumericSolver(ASSET_COST_BRANCHES),
    },
    FormulaDefinition {
        id: 22,
        name: "Optimal Internal Transfer Price",
        description: "Scenarios for determining the Optimal Internal Transfer Price",
        category: Category::InternalPricing,
        variables: TRANSFER_PRICE_VARS,
        capability: Capability::ScenarioDecision,
    },
    FormulaDefinition {
        id: 23,
        name: "Incremental Economic Profit",
        description: "Incremental Economic Profit (EP) = Incremental Operating Profit – (Incremental Invested Capital × COIC)",
        category: Category::ProjectEvaluation,
        variables: INCREMENTAL_EP_VARS,
        capability: Capability::NumericSolver(INCREMENTAL_EP_BRANCHES),
    },
    FormulaDefinition {
        id: 24,
        name: "Financing Cost of Delayed Payment",
        description: "Financing Cost of Delayed Payment = Amount of Receivable × COIC % × (Delay Period in months / 12)",
        category: Category::ProjectEvaluation,
        variables: DELAYED_PAYMENT_VARS,
        capability: Capability::NumericSolver(DELAYED_PAYMENT_BRANCHES),
    },
];
