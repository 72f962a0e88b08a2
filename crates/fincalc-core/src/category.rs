//! Formula categories.
//!
//! Categories only organize the catalogue; they never take part in a
//! computation. The declaration order is the display order.

use serde::{Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Macro: defines a closed enum with a display title per variant and an
// ordered `ALL` table.
// ---------------------------------------------------------------------------
macro_rules! define_category {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( ($variant:ident, $key:expr, $title:expr) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [$name] = &[ $( Self::$variant, )+ ];

            /// Short machine-friendly key.
            pub fn key(&self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )+
                }
            }

            /// Full display title, including the roman-numeral prefix.
            pub fn title(&self) -> &'static str {
                match self {
                    $( Self::$variant => $title, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.title())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.title())
            }
        }
    };
}

define_category! {
    /// The fixed, ordered set of catalogue groups.
    Category {
        (BasicProfitability, "basic-profitability", "I. Basic Profitability & Cost Structure"),
        (ProfitabilityRatios, "profitability-ratios", "II. Profitability Ratios & Advanced Financial Metrics"),
        (SensitivityAnalysis, "sensitivity-analysis", "III. Sensitivity & Decision Analysis"),
        (CostAllocation, "cost-allocation", "IV. Cost Allocation & Asset Valuation"),
        (InternalPricing, "internal-pricing", "V. Internal Pricing"),
        (ProjectEvaluation, "project-evaluation", "VI. Specific Project/Decision Evaluation"),
    }
}
