use crate::models::ChannelRecord;

/// A hand-picked channel merged after every catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedChannel {
    pub name: &'static str,
    pub url: &'static str,
    pub region: &'static str,
    pub source: &'static str,
}

impl CuratedChannel {
    pub fn to_record(&self) -> ChannelRecord {
        let extinf = format!(
            "#EXTINF:-1 tvg-name=\"{name}\" tvg-logo=\"\",{name}",
            name = self.name
        );
        ChannelRecord::new(self.name, self.url, self.source, self.region, "", "", extinf)
    }
}

pub fn curated_records(curated: &[CuratedChannel]) -> Vec<ChannelRecord> {
    curated.iter().map(CuratedChannel::to_record).collect()
}

pub const CURATED_CHANNELS: &[CuratedChannel] = &[
    CuratedChannel {
        name: "VH1 Classics",
        url: "https://service-stitcher.clusters.pluto.tv/v1/stitch/embed/hls/channel/6076cd1df8576d0007c82193/master.m3u8?deviceId=channel&deviceModel=web&deviceVersion=1.0&appVersion=1.0&deviceType=web&deviceMake=web&deviceDNT=1",
        region: "US",
        source: "Pluto TV US",
    },
    CuratedChannel {
        name: "VH1 I Love Reality",
        url: "https://service-stitcher.clusters.pluto.tv/v1/stitch/embed/hls/channel/5d7154fa8326b6ce4ec31f2e/master.m3u8?deviceId=channel&deviceModel=web&deviceVersion=1.0&appVersion=1.0&deviceType=web&deviceMake=web&deviceDNT=1",
        region: "US",
        source: "Pluto TV US",
    },
    CuratedChannel {
        name: "VH1 Hip Hop Family",
        url: "https://service-stitcher.clusters.pluto.tv/v1/stitch/embed/hls/channel/5d71561df6f2e6d0b6493bf5/master.m3u8?deviceId=channel&deviceModel=web&deviceVersion=1.0&appVersion=1.0&deviceType=web&deviceMake=web&deviceDNT=1",
        region: "US",
        source: "Pluto TV US",
    },
    CuratedChannel {
        name: "VH1 Queens of Reality",
        url: "https://service-stitcher.clusters.pluto.tv/v1/stitch/embed/hls/channel/66abefe5d2d50d00082c7d12/master.m3u8?deviceId=channel&deviceModel=web&deviceVersion=1.0&appVersion=1.0&deviceType=web&deviceMake=web&deviceDNT=1",
        region: "US",
        source: "Pluto TV US",
    },
    CuratedChannel {
        name: "VH1+ Music Legends",
        url: "https://service-stitcher.clusters.pluto.tv/v1/stitch/embed/hls/channel/62e8cc10ca869f00078efca8/master.m3u8?deviceId=channel&deviceModel=web&deviceVersion=1.0&appVersion=1.0&deviceType=web&deviceMake=web&deviceDNT=1",
        region: "IT",
        source: "Pluto TV IT",
    },
    CuratedChannel {
        name: "VH1+ Back to 90's",
        url: "https://service-stitcher.clusters.pluto.tv/v1/stitch/embed/hls/channel/6552085aab05240008b05f6c/master.m3u8?deviceId=channel&deviceModel=web&deviceVersion=1.0&appVersion=1.0&deviceType=web&deviceMake=web&deviceDNT=1",
        region: "IT",
        source: "Pluto TV IT",
    },
    CuratedChannel {
        name: "VH1+ Rock!",
        url: "https://service-stitcher.clusters.pluto.tv/v1/stitch/embed/hls/channel/636a4173e34fd50007534542/master.m3u8?deviceId=channel&deviceModel=web&deviceVersion=1.0&appVersion=1.0&deviceType=web&deviceMake=web&deviceDNT=1",
        region: "IT",
        source: "Pluto TV IT",
    },
    CuratedChannel {
        name: "VH1+ Dance",
        url: "https://service-stitcher.clusters.pluto.tv/v1/stitch/embed/hls/channel/65e5d9d2ec9fda0008c35f91/master.m3u8?deviceId=channel&deviceModel=web&deviceVersion=1.0&appVersion=1.0&deviceType=web&deviceMake=web&deviceDNT=1",
        region: "IT",
        source: "Pluto TV IT",
    },
    CuratedChannel {
        name: "VH1+ Classici",
        url: "https://service-stitcher.clusters.pluto.tv/v1/stitch/embed/hls/channel/6690f892d51259000880d1c4/master.m3u8?deviceId=channel&deviceModel=web&deviceVersion=1.0&appVersion=1.0&deviceType=web&deviceMake=web&deviceDNT=1",
        region: "IT",
        source: "Pluto TV IT",
    },
    CuratedChannel {
        name: "VH1 Italia",
        url: "https://content.uplynk.com/channel/36953f5b6546464590d2fcd954bc89cf.m3u8",
        region: "IT",
        source: "iptv-org",
    },
    CuratedChannel {
        name: "MTV East",
        url: "https://fl1.moveonjoy.com/MTV/index.m3u8",
        region: "US",
        source: "MoveOnJoy",
    },
    CuratedChannel {
        name: "MTV2",
        url: "https://fl1.moveonjoy.com/MTV_2/index.m3u8",
        region: "US",
        source: "MoveOnJoy",
    },
    CuratedChannel {
        name: "MTV Live",
        url: "https://fl1.moveonjoy.com/MTV_LIVE/index.m3u8",
        region: "US",
        source: "MoveOnJoy",
    },
    CuratedChannel {
        name: "mtvU",
        url: "https://fl1.moveonjoy.com/MTV_U/index.m3u8",
        region: "US",
        source: "MoveOnJoy",
    },
    CuratedChannel {
        name: "MTV Spankin' New",
        url: "http://cfd-v4-service-channel-stitcher-use1-1.prd.pluto.tv/stitch/hls/channel/5d14fdb8ca91eedee1633117/master.m3u8?appName=web&appVersion=unknown&deviceDNT=0&deviceId=mtv-spankin&deviceMake=Chrome&deviceModel=web&deviceType=web&deviceVersion=unknown&includeExtendedEvents=false&serverSideAds=false",
        region: "US",
        source: "Pluto TV US",
    },
    CuratedChannel {
        name: "MTV en Español",
        url: "http://cfd-v4-service-channel-stitcher-use1-1.prd.pluto.tv/stitch/hls/channel/5cf96d351652631e36d4331f/master.m3u8?appName=web&appVersion=unknown&deviceDNT=0&deviceId=mtv-espanol&deviceMake=Chrome&deviceModel=web&deviceType=web&deviceVersion=unknown&includeExtendedEvents=false&serverSideAds=false",
        region: "US",
        source: "Pluto TV US",
    },
    CuratedChannel {
        name: "MTV Flow Latino",
        url: "http://cfd-v4-service-channel-stitcher-use1-1.prd.pluto.tv/stitch/hls/channel/5d3609cd6a6c78d7672f2a81/master.m3u8?appName=web&appVersion=unknown&deviceDNT=0&deviceId=mtv-flow&deviceMake=Chrome&deviceModel=web&deviceType=web&deviceVersion=unknown&includeExtendedEvents=false&serverSideAds=false",
        region: "US",
        source: "Pluto TV US",
    },
    CuratedChannel {
        name: "MTV Music",
        url: "http://cfd-v4-service-channel-stitcher-use1-1.prd.pluto.tv/stitch/hls/channel/6245d15062cd1f00070a2338/master.m3u8?appName=web&appVersion=unknown&deviceDNT=0&deviceId=mtv-music&deviceMake=Chrome&deviceModel=web&deviceType=web&deviceVersion=unknown&includeExtendedEvents=false&serverSideAds=false",
        region: "DE",
        source: "Pluto TV DE",
    },
    CuratedChannel {
        name: "MTV Classics FR",
        url: "http://cfd-v4-service-channel-stitcher-use1-1.prd.pluto.tv/stitch/hls/channel/5f92b56a367e170007cd43f4/master.m3u8?appName=web&appVersion=unknown&deviceDNT=0&deviceId=mtv-classics-fr&deviceMake=Chrome&deviceModel=web&deviceType=web&deviceVersion=unknown&includeExtendedEvents=false&serverSideAds=false",
        region: "FR",
        source: "Pluto TV FR",
    },
    CuratedChannel {
        name: "MTV Originals ES",
        url: "https://service-stitcher.clusters.pluto.tv/stitch/hls/channel/5f1aadf373bed3000794d1d7/master.m3u8?advertisingId=&appName=web&appVersion=DNT&deviceDNT=0&deviceId=mtv-originals&deviceMake=web&deviceModel=web&deviceType=web&deviceVersion=DNT&includeExtendedEvents=false&serverSideAds=false",
        region: "ES",
        source: "Pluto TV ES",
    },
    CuratedChannel {
        name: "MTV 00s",
        url: "http://myott.top/stream/DT6QU63K5VX/165.m3u8",
        region: "INT",
        source: "myott",
    },
    CuratedChannel {
        name: "MTV 80s",
        url: "http://myott.top/stream/DT6QU63K5VX/87.m3u8",
        region: "INT",
        source: "myott",
    },
    CuratedChannel {
        name: "MTV 90s",
        url: "http://myott.top/stream/DT6QU63K5VX/88.m3u8",
        region: "INT",
        source: "myott",
    },
    CuratedChannel {
        name: "MTV Hits",
        url: "http://myott.top/stream/DT6QU63K5VX/302.m3u8",
        region: "INT",
        source: "myott",
    },
    CuratedChannel {
        name: "BandNews TV",
        url: "https://evpp.mm.uol.com.br/geob_band/bandnewstv/playlist.m3u8",
        region: "BR",
        source: "Band",
    },
    CuratedChannel {
        name: "XITE Rock x Metal",
        url: "http://cfd-v4-service-channel-stitcher-use1-1.prd.pluto.tv/stitch/hls/channel/623a1b5188ecdc0007c9ef5a/master.m3u8?appName=web&appVersion=unknown&deviceDNT=0&deviceId=rock&deviceMake=Chrome&deviceModel=web&deviceType=web&deviceVersion=unknown&includeExtendedEvents=false&serverSideAds=false",
        region: "US",
        source: "Pluto TV US",
    },
    CuratedChannel {
        name: "Vevo Rock",
        url: "http://cfd-v4-service-channel-stitcher-use1-1.prd.pluto.tv/stitch/hls/channel/61d4b38226b8a50007fe03a6/master.m3u8?appName=web&appVersion=unknown&deviceDNT=0&deviceId=rock&deviceMake=Chrome&deviceModel=web&deviceType=web&deviceVersion=unknown&includeExtendedEvents=false&serverSideAds=false",
        region: "US",
        source: "Pluto TV US",
    },
    CuratedChannel {
        name: "Live Music",
        url: "http://cfd-v4-service-channel-stitcher-use1-1.prd.pluto.tv/stitch/hls/channel/5873fc21cad696fb37aa9054/master.m3u8?appName=web&appVersion=unknown&deviceDNT=0&deviceId=rock&deviceMake=Chrome&deviceModel=web&deviceType=web&deviceVersion=unknown&includeExtendedEvents=false&serverSideAds=false",
        region: "US",
        source: "Pluto TV US",
    },
    CuratedChannel {
        name: "Stingray Classic Rock",
        url: "https://stirr.ott-channels.stingray.com/101/master.m3u8",
        region: "US",
        source: "Stirr/Stingray",
    },
    CuratedChannel {
        name: "Stingray Rock Alternative",
        url: "https://stirr.ott-channels.stingray.com/102/master.m3u8",
        region: "US",
        source: "Stirr/Stingray",
    },
    CuratedChannel {
        name: "Stingray Classic Rock INT",
        url: "https://lotus.stingray.com/manifest/ose-101ads-montreal/samsungtvplus/master.m3u8",
        region: "INT",
        source: "Stingray/Samsung",
    },
    CuratedChannel {
        name: "Stingray Rock Alternative INT",
        url: "https://lotus.stingray.com/manifest/ose-102ads-montreal/samsungtvplus/master.m3u8",
        region: "INT",
        source: "Stingray/Samsung",
    },
    CuratedChannel {
        name: "Rock TV Romania",
        url: "https://tv.broadcasting.ro/rocktv/85c83a80-4f71-4f2d-a8d6-43f676896bcb.m3u8",
        region: "RO",
        source: "broadcasting.ro",
    },
    CuratedChannel {
        name: "Rock TV Macedonia",
        url: "https://stream.nasatv.com.mk/rocktv/hls/rocktv_live.m3u8",
        region: "MK",
        source: "nasatv.com.mk",
    },
    CuratedChannel {
        name: "DJING Electro Rock",
        url: "https://www.djing.com/tv/s-28676-05-electro-rock.m3u8",
        region: "FR",
        source: "DJing.com",
    },
    CuratedChannel {
        name: "Now Rock AU",
        url: "https://lightningnow90-samsungau.amagi.tv/playlist.m3u8",
        region: "AU",
        source: "Now Music/Amagi",
    },
];
