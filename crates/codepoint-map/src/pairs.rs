//! Simplified/Traditional Chinese character pairs
//!
//! Each whitespace-separated token is one simplified character followed by
//! its traditional form. Only one-to-one conversions are listed; characters
//! whose traditional form depends on the word (后, 发, 干, 面, 里, ...) are
//! left to mapping files.

const PAIRS: &str = concat!(
    "万萬 与與 专專 业業 丛叢 东東 丝絲 两兩 严嚴 丧喪 个個 临臨 为為 丽麗 举舉 义義 乌烏 乐樂 乔喬 习習 ",
    "乡鄉 书書 买買 乱亂 争爭 亏虧 亚亞 产產 亩畝 亲親 亿億 仅僅 从從 仑侖 仓倉 仪儀 们們 优優 伞傘 伟偉 ",
    "传傳 伤傷 伦倫 伪偽 体體 侠俠 侣侶 侥僥 债債 倾傾 儿兒 党黨 兰蘭 关關 兴興 兹茲 养養 兽獸 冈岡 册冊 ",
    "写寫 军軍 农農 冯馮 决決 况況 冻凍 净淨 凉涼 减減 凤鳳 凭憑 击擊 刘劉 则則 刚剛 创創 删刪 别別 刹剎 ",
    "剂劑 剑劍 剧劇 劝勸 办辦 务務 动動 励勵 劲勁 劳勞 势勢 勋勳 区區 医醫 华華 协協 单單 卖賣 卢盧 卫衛 ",
    "却卻 厂廠 厅廳 压壓 厌厭 县縣 参參 双雙 变變 叙敘 叶葉 号號 叹嘆 吓嚇 吕呂 吗嗎 吨噸 听聽 启啟 吴吳 ",
    "员員 响響 哑啞 唤喚 园園 围圍 国國 图圖 圆圓 圣聖 场場 坏壞 块塊 坚堅 坝壩 坟墳 垄壟 垒壘 垦墾 执執 ",
    "报報 扩擴 扫掃 扬揚 护護 拥擁 挂掛 择擇 换換 据據 掷擲 搅攪 携攜 摄攝 摆擺 敌敵 数數 斋齋 断斷 无無 ",
    "旧舊 时時 旷曠 昼晝 显顯 晋晉 晒曬 晓曉 暂暫 术術 机機 杀殺 杂雜 权權 条條 来來 杨楊 杰傑 极極 构構 ",
    "枪槍 柜櫃 标標 栋棟 栏欄 树樹 样樣 桥橋 检檢 楼樓 欢歡 欧歐 岁歲 归歸 毕畢 毙斃 气氣 汉漢 汤湯 沟溝 ",
    "没沒 沪滬 泪淚 泽澤 洁潔 浅淺 测測 济濟 浓濃 涛濤 润潤 涨漲 渐漸 温溫 湾灣 满滿 滚滾 灭滅 灯燈 灵靈 ",
    "灾災 炉爐 点點 炼煉 烂爛 热熱 爱愛 爷爺 牵牽 犹猶 状狀 独獨 狮獅 献獻 猎獵 环環 现現 琐瑣 电電 画畫 ",
    "畅暢 疗療 疯瘋 盐鹽 监監 盖蓋 盘盤 睁睜 矿礦 码碼 础礎 确確 碍礙 礼禮 祷禱 祸禍 离離 种種 积積 称稱 ",
    "稳穩 穷窮 窃竊 竞競 笔筆 笋筍 筑築 简簡 签簽 类類 粪糞 紧緊 纠糾 红紅 约約 级級 纪紀 纯純 纲綱 纳納 ",
    "纸紙 线線 练練 组組 细細 织織 终終 绍紹 经經 结結 绕繞 绘繪 给給 络絡 绝絕 统統 继繼 续續 维維 综綜 ",
    "绿綠 编編 缘緣 缩縮 网網 罗羅 罚罰 职職 联聯 聪聰 肃肅 肠腸 肤膚 肿腫 胁脅 胜勝 脑腦 脚腳 脸臉 舰艦 ",
    "艺藝 节節 苏蘇 茧繭 荐薦 药藥 莱萊 营營 萨薩 蓝藍 虑慮 虽雖 蚀蝕 蚂螞 蛮蠻 补補 衬襯 袜襪 装裝 见見 ",
    "观觀 规規 视視 览覽 觉覺 触觸 计計 订訂 认認 讨討 让讓 训訓 议議 讯訊 记記 讲講 许許 论論 设設 访訪 ",
    "证證 评評 识識 诉訴 词詞 译譯 试試 诗詩 诚誠 话話 询詢 该該 详詳 语語 误誤 说說 请請 诸諸 读讀 课課 ",
    "谁誰 调調 谈談 谢謝 谣謠 贝貝 负負 贡貢 财財 责責 败敗 货貨 质質 贩販 贪貪 贫貧 购購 贯貫 贵貴 贸貿 ",
    "费費 贺賀 资資 赏賞 赔賠 赖賴 赚賺 赛賽 赞贊 赵趙 趋趨 跃躍 践踐 踪蹤 车車 轨軌 转轉 轮輪 软軟 轻輕 ",
    "载載 较較 辆輛 辉輝 输輸 辞辭 边邊 达達 迁遷 过過 运運 还還 这這 进進 远遠 违違 连連 迟遲 选選 递遞 ",
    "邮郵 邻鄰 郑鄭 酱醬 释釋 钢鋼 钥鑰 钱錢 铁鐵 铜銅 铃鈴 银銀 销銷 锁鎖 锅鍋 错錯 键鍵 镇鎮 镜鏡 长長 ",
    "门門 闪閃 闭閉 问問 闯闖 间間 闷悶 闹鬧 闻聞 阅閱 队隊 阳陽 阴陰 阵陣 阶階 际際 陆陸 陈陳 险險 随隨 ",
    "隐隱 难難 雾霧 韩韓 页頁 顶頂 项項 顺順 顾顧 顿頓 预預 领領 频頻 题題 颜顏 额額 风風 飘飄 飞飛 饭飯 ",
    "饮飲 饰飾 饱飽 饼餅 馆館 马馬 驱驅 驶駛 驻駐 驾駕 验驗 骑騎 骗騙 鱼魚 鲜鮮 鸟鳥 鸡雞 鸣鳴 鸭鴨 麦麥 ",
    "黄黃 齐齊 齿齒 龙龍 龟龜 团團 扑撲 尝嘗 会會 对對 开開",
);

/// `(simplified, traditional)` pairs in table order
pub(crate) fn simplified_traditional() -> impl Iterator<Item = (char, char)> {
    PAIRS.split_whitespace().filter_map(|token| {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(simplified), Some(traditional), None) => Some((simplified, traditional)),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_token_is_a_pair() {
        let tokens = PAIRS.split_whitespace().count();
        assert_eq!(simplified_traditional().count(), tokens);
    }

    #[test]
    fn test_pairs_are_one_to_one() {
        let mut simplified = HashSet::new();
        let mut traditional = HashSet::new();
        for (s, t) in simplified_traditional() {
            assert_ne!(s, t);
            assert!(simplified.insert(s), "{s} listed twice");
            assert!(traditional.insert(t), "{t} listed twice");
        }
        assert!(simplified.is_disjoint(&traditional));
    }

    #[test]
    fn test_well_known_pairs() {
        let pairs: Vec<_> = simplified_traditional().collect();
        assert!(pairs.contains(&('国', '國')));
        assert!(pairs.contains(&('图', '圖')));
        assert!(pairs.contains(&('汉', '漢')));
    }
}
