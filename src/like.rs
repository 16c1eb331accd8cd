use thiserror::Error;

pub const LOADING_MESSAGE: &str = "正在加载点赞人数…";
pub const UNAVAILABLE_MESSAGE: &str = "点赞服务暂时不可用";
pub const FAILED_MESSAGE: &str = "点赞失败，请稍后再试";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Pending,
    Liked,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LikeRejected {
    #[error("like already recorded")]
    AlreadyLiked,
    #[error("a like request is already in flight")]
    RequestInFlight,
}

impl ButtonState {
    pub fn from_liked(liked: bool) -> Self {
        if liked {
            ButtonState::Liked
        } else {
            ButtonState::Idle
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonState::Idle => "idle",
            ButtonState::Pending => "pending",
            ButtonState::Liked => "liked",
        }
    }

    pub fn is_liked(self) -> bool {
        self == ButtonState::Liked
    }

    pub fn begin(&mut self) -> Result<(), LikeRejected> {
        match self {
            ButtonState::Idle => {
                *self = ButtonState::Pending;
                Ok(())
            }
            ButtonState::Pending => Err(LikeRejected::RequestInFlight),
            ButtonState::Liked => Err(LikeRejected::AlreadyLiked),
        }
    }

    pub fn complete(&mut self) {
        *self = ButtonState::Liked;
    }

    // liked is terminal; only a pending attempt falls back to idle.
    pub fn fail(&mut self) {
        if *self == ButtonState::Pending {
            *self = ButtonState::Idle;
        }
    }
}

pub fn count_message(value: i64) -> String {
    let safe = value.max(0) as u64;
    format!("已有 {} 人点赞", format_count(safe))
}

pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
