//! User-facing messages, single locale (Korean) as shipped.

/// Generic per-field validation failure.
pub const INVALID_INPUT: &str = "유효하지 않은 입력입니다.";

/// Dates mode submitted without both dates selected.
pub const SELECT_DATES: &str = "날짜를 선택해주세요.";

/// CAGR form submitted without both amounts.
pub const ENTER_INITIAL_AND_FINAL: &str = "초기금액과 최종금액을 입력해주세요.";

/// Final-amount form submitted without amount and rate.
pub const ENTER_INITIAL_AND_RATE: &str = "초기 금액과 이자율을 입력해주세요.";

/// Computation produced `NaN`/`Infinity`; nothing to display.
pub const RESULT_UNAVAILABLE: &str = "계산 결과를 표시할 수 없습니다.";

/// Start date after end date, shown on the start field.
pub const START_AFTER_END: &str = "시작 날짜는 종료 날짜보다 늦을 수 없습니다.";

/// Start date after end date, shown on the end field.
pub const END_BEFORE_START: &str = "종료 날짜는 시작 날짜보다 빠를 수 없습니다.";

/// Negative amounts are rejected on the rent conversion forms.
pub const NEGATIVE_NOT_ALLOWED: &str = "음수는 입력할 수 없습니다";

/// Conversion rate is capped at 100%.
pub const RATE_OVER_100: &str = "전환율은 100% 이하여야 합니다";

/// Monthly deposit may not exceed the jeonse deposit.
pub const DEPOSIT_EXCEEDS_JEONSE: &str = "월세 보증금은 전세 보증금보다 클 수 없습니다";
