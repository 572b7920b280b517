use crate::core::policy::{AgeOrder, NameOrder};
use crate::core::{OrderingPolicy, ParameterShape, Person, PolicyReport};
use std::any::type_name;

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// 只有實作 `OrderingPolicy` 的型別才能通過編譯，因此結果恆為 true
pub fn inspect<P: OrderingPolicy + 'static>() -> PolicyReport {
    let record_type = short_type_name::<Person>().to_string();

    PolicyReport {
        type_name: short_type_name::<P>().to_string(),
        full_name: type_name::<P>().to_string(),
        implements_ordering_policy: true,
        compare_parameters: vec![
            ParameterShape {
                type_name: record_type.clone(),
                name: "a".to_string(),
            },
            ParameterShape {
                type_name: record_type,
                name: "b".to_string(),
            },
        ],
    }
}

pub fn builtin_policy_reports() -> Vec<PolicyReport> {
    vec![inspect::<AgeOrder>(), inspect::<NameOrder>()]
}
