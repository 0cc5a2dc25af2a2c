mod channels;

pub use channels::{Channels, IChannelSender, RecordingChannelSender, RelayChannelSender};
