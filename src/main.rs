// 地址翻译命令行工具 - 手动验证翻译管线
use anyhow::Result;

use address_bot_lib::config::AppConfig;
use address_bot_lib::gazetteer::RemoteGazetteer;
use address_bot_lib::service::AddressService;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    let config = AppConfig::load()?;
    let gazetteer = RemoteGazetteer::new(&config)?;
    let service = AddressService::new(gazetteer);

    let stats = service.stats().await?;
    println!(
        "地名数据: {} 行政区 / {} 村里 / {} 街路\n",
        stats.regions, stats.villages, stats.roads
    );

    // 参数模式：逐条翻译命令行地址
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        for address in &args {
            println!("{}", service.reply(address).await);
        }
        return Ok(());
    }

    // 交互模式：逐行读入
    println!("輸入中文地址（Ctrl-D 結束）:");
    let mut line = String::new();
    loop {
        line.clear();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let address = line.trim();
        if address.is_empty() {
            continue;
        }
        println!("{}\n", service.reply(address).await);
    }

    Ok(())
}
