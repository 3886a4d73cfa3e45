use std::num::NonZeroU64;

use anyhow::{Context, anyhow, bail, ensure};

use super::monkey::{Monkey, Operand, Operation, Operator};
use super::simulation::Troop;

/// Parses the blank-line separated monkey descriptions into a troop.
///
/// A line holding only whitespace counts as blank.
pub fn parse_troop(input: &str) -> anyhow::Result<Troop> {
    let lines: Vec<&str> = input.lines().map(str::trim).collect();
    let monkeys = lines
        .split(|line| line.is_empty())
        .filter(|record| !record.is_empty())
        .enumerate()
        .map(|(position, record)| {
            parse_monkey(position, record).with_context(|| format!("monkey {position}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Troop::new(monkeys).map_err(anyhow::Error::from)
}

fn parse_monkey(position: usize, lines: &[&str]) -> anyhow::Result<Monkey> {
    ensure!(
        lines.len() == 6,
        "expected 6 lines per monkey, found {}",
        lines.len()
    );

    let in_line = |k: usize| move |e: anyhow::Error| e.context(format!("line {}", k + 1));

    let id = parse_header(lines[0]).map_err(in_line(0))?;
    ensure!(id == position, "header names monkey {id} at position {position}");

    let items = field(lines[1], "Starting items:")
        .and_then(parse_items)
        .map_err(in_line(1))?;
    let operation = field(lines[2], "Operation:")
        .and_then(parse_operation)
        .map_err(in_line(2))?;
    let divisor = field(lines[3], "Test: divisible by")
        .and_then(parse_number::<u64>)
        .and_then(|n| NonZeroU64::new(n).ok_or_else(|| anyhow!("divisor must be non-zero")))
        .map_err(in_line(3))?;
    let if_true = field(lines[4], "If true: throw to monkey")
        .and_then(parse_number::<usize>)
        .map_err(in_line(4))?;
    let if_false = field(lines[5], "If false: throw to monkey")
        .and_then(parse_number::<usize>)
        .map_err(in_line(5))?;

    Ok(Monkey::new(id, items, operation, divisor, if_true, if_false))
}

/// Strips `prefix` from `line`, failing when it is not there.
fn field<'a>(line: &'a str, prefix: &str) -> anyhow::Result<&'a str> {
    line.strip_prefix(prefix)
        .map(str::trim)
        .ok_or_else(|| anyhow!("expected {prefix:?}, got {line:?}"))
}

fn parse_number<T>(text: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse()
        .with_context(|| format!("invalid number {text:?}"))
}

fn parse_header(line: &str) -> anyhow::Result<usize> {
    let id = line
        .strip_prefix("Monkey ")
        .and_then(|rest| rest.strip_suffix(':'))
        .ok_or_else(|| anyhow!("expected \"Monkey <id>:\", got {line:?}"))?;
    parse_number(id)
}

fn parse_items(list: &str) -> anyhow::Result<Vec<u64>> {
    if list.is_empty() {
        return Ok(Vec::new());
    }
    list.split(',').map(|item| parse_number(item.trim())).collect()
}

fn parse_operation(expr: &str) -> anyhow::Result<Operation> {
    let rhs = expr
        .strip_prefix("new = old ")
        .ok_or_else(|| anyhow!("expected \"new = old <op> <operand>\", got {expr:?}"))?;
    let (op, operand) = rhs
        .split_once(' ')
        .ok_or_else(|| anyhow!("missing operand in {expr:?}"))?;

    let operator = match op {
        "+" => Operator::Add,
        "*" => Operator::Multiply,
        other => bail!("unsupported operator {other:?}"),
    };
    let operand = match operand.trim() {
        "old" => Operand::Old,
        literal => Operand::Literal(parse_number(literal)?),
    };
    Ok(Operation { operator, operand })
}

#[cfg(test)]
mod tests {
    use super::super::SAMPLE;
    use super::*;

    fn error_chain(input: &str) -> String {
        format!("{:#}", parse_troop(input).unwrap_err())
    }

    const TWO_MONKEYS: &str = "\
Monkey 0:
  Starting items: 1, 2
  Operation: new = old + 3
  Test: divisible by 5
    If true: throw to monkey 1
    If false: throw to monkey 1

Monkey 1:
  Starting items:
  Operation: new = old * old
  Test: divisible by 7
    If true: throw to monkey 0
    If false: throw to monkey 0
";

    #[test]
    fn test_parse_sample() {
        let troop = parse_troop(SAMPLE).unwrap();
        let monkeys = troop.monkeys();
        assert_eq!(monkeys.len(), 4);

        assert_eq!(monkeys[0].items().collect::<Vec<_>>(), vec![79, 98]);
        assert_eq!(monkeys[0].operation().to_string(), "new = old * 19");
        assert_eq!(monkeys[0].divisor().get(), 23);
        assert_eq!(monkeys[0].targets(), (2, 3));

        assert_eq!(monkeys[1].items().collect::<Vec<_>>(), vec![54, 65, 75, 74]);
        assert_eq!(monkeys[1].operation().to_string(), "new = old + 6");

        assert_eq!(
            monkeys[2].operation(),
            Operation {
                operator: Operator::Multiply,
                operand: Operand::Old
            }
        );
        assert_eq!(monkeys[3].items().collect::<Vec<_>>(), vec![74]);
        assert_eq!(monkeys[3].targets(), (0, 1));
        assert!(monkeys.iter().all(|m| m.inspections() == 0));
    }

    #[test]
    fn test_empty_starting_items() {
        let troop = parse_troop(TWO_MONKEYS).unwrap();
        assert_eq!(troop.monkeys()[1].items().len(), 0);
        assert_eq!(troop.item_count(), 2);
    }

    #[test]
    fn test_crlf_and_extra_blank_lines() {
        let crlf = format!("\r\n{}\r\n\r\n", TWO_MONKEYS.replace('\n', "\r\n"));
        assert_eq!(parse_troop(&crlf).unwrap(), parse_troop(TWO_MONKEYS).unwrap());
    }

    #[test]
    fn test_whitespace_only_separator_lines() {
        let spaced = TWO_MONKEYS.replace("\n\nMonkey 1:", "\n  \t \nMonkey 1:");
        assert_eq!(parse_troop(&spaced).unwrap(), parse_troop(TWO_MONKEYS).unwrap());

        let padded = format!(" \n{TWO_MONKEYS}\t\n\n   \n");
        assert_eq!(parse_troop(&padded).unwrap().monkeys().len(), 2);
    }

    #[test]
    fn test_unknown_operator() {
        let input = TWO_MONKEYS.replace("old + 3", "old - 3");
        let message = error_chain(&input);
        assert!(message.contains("monkey 0"), "{message}");
        assert!(message.contains("line 3"), "{message}");
        assert!(message.contains("unsupported operator"), "{message}");
    }

    #[test]
    fn test_bad_number() {
        let input = TWO_MONKEYS.replace("1, 2", "1, two");
        let message = error_chain(&input);
        assert!(message.contains("line 2"), "{message}");
        assert!(message.contains("\"two\""), "{message}");
    }

    #[test]
    fn test_missing_line() {
        let input = TWO_MONKEYS.replace("    If false: throw to monkey 0\n", "");
        let message = error_chain(&input);
        assert!(message.contains("monkey 1"), "{message}");
        assert!(message.contains("expected 6 lines"), "{message}");
    }

    #[test]
    fn test_zero_divisor() {
        let input = TWO_MONKEYS.replace("divisible by 7", "divisible by 0");
        assert!(error_chain(&input).contains("divisor must be non-zero"));
    }

    #[test]
    fn test_misnumbered_header() {
        let input = TWO_MONKEYS.replace("Monkey 1:", "Monkey 4:");
        assert!(error_chain(&input).contains("header names monkey 4 at position 1"));
    }

    #[test]
    fn test_troop_rules_are_enforced() {
        let self_target = TWO_MONKEYS.replace(
            "If true: throw to monkey 0",
            "If true: throw to monkey 1",
        );
        assert!(error_chain(&self_target).contains("throws to itself"));

        let unknown = TWO_MONKEYS.replace(
            "If false: throw to monkey 1",
            "If false: throw to monkey 9",
        );
        assert!(error_chain(&unknown).contains("does not exist"));

        let (first, _) = TWO_MONKEYS.split_once("\n\n").unwrap();
        assert!(error_chain(first).contains("at least two monkeys"));
        assert!(error_chain("").contains("at least two monkeys"));
    }
}
