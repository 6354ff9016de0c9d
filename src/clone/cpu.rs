//! CPU count, limit and reservation directives.

use tracing::debug;

use crate::directive::{Directive, DirectiveBuilder};
use crate::request::{NO_CPU_LIMIT, NO_CPU_RESERVE};

/// Compiles the CPU settings of a request into an ordered directive.
///
/// Flags are emitted in a fixed order: `-CPUCount`, `-CPUMaximumPercent`,
/// `-CPUReserve`. A limit of `-1` and a reservation of `0` are treated as
/// not configured. Limit and reservation are independent of each other.
pub fn compile_cpu_directive(
    number_of_sockets: Option<u32>,
    limit_percent: Option<i32>,
    reserve_percent: Option<i32>,
) -> Directive {
    let mut builder = DirectiveBuilder::new();

    builder.push_integer("CPUCount", number_of_sockets.map(i64::from));
    builder.push_integer_unless(
        "CPUMaximumPercent",
        limit_percent.map(i64::from),
        i64::from(NO_CPU_LIMIT),
    );
    builder.push_integer_unless(
        "CPUReserve",
        reserve_percent.map(i64::from),
        i64::from(NO_CPU_RESERVE),
    );

    let directive = builder.into_directive();
    debug!("cpu directive: {:?}", directive.render());
    directive
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::DirectiveValue;

    #[test]
    fn test_sockets_only() {
        assert_eq!(compile_cpu_directive(Some(2), None, None).render(), "-CPUCount 2 ");
    }

    #[test]
    fn test_sockets_and_limit() {
        assert_eq!(
            compile_cpu_directive(Some(2), Some(40), None).render(),
            "-CPUCount 2 -CPUMaximumPercent 40 "
        );
    }

    #[test]
    fn test_flags_collected_in_fixed_order() {
        let directive = compile_cpu_directive(Some(2), Some(40), Some(15));
        let flags: Vec<_> = directive.params().iter().map(|(flag, _)| flag.as_str()).collect();
        assert_eq!(flags, vec!["CPUCount", "CPUMaximumPercent", "CPUReserve"]);
        assert_eq!(directive.params()[1].1, DirectiveValue::Integer(40));
    }

    #[test]
    fn test_sockets_and_reserve() {
        assert_eq!(
            compile_cpu_directive(Some(2), None, Some(15)).render(),
            "-CPUCount 2 -CPUReserve 15 "
        );
    }

    #[test]
    fn test_limit_and_reserve_together() {
        assert_eq!(
            compile_cpu_directive(Some(4), Some(80), Some(20)).render(),
            "-CPUCount 4 -CPUMaximumPercent 80 -CPUReserve 20 "
        );
    }

    #[test]
    fn test_sentinels_produce_empty_directive() {
        let directive = compile_cpu_directive(None, Some(NO_CPU_LIMIT), Some(NO_CPU_RESERVE));
        assert!(directive.is_empty());
        assert_eq!(directive.render(), "");
    }

    #[test]
    fn test_limit_without_sockets() {
        assert_eq!(
            compile_cpu_directive(None, Some(50), Some(0)).render(),
            "-CPUMaximumPercent 50 "
        );
    }
}
